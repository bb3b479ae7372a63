// App state and main event loop.
// Drives the gist menu: loading, navigation, and pasting into the target folder.

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tracing::warn;

use crate::cache::{Clock, SystemClock};
use crate::github::{GistApi, GistFileRecord};
use crate::paste::PasteRequest;
use crate::service::GistMenuService;
use crate::state::{LoadingState, MenuState, Notice};
use crate::ui;

/// Main application state.
pub struct App<A, C = SystemClock> {
    pub service: GistMenuService<A, C>,
    /// GitHub user whose gists are listed.
    pub username: String,
    /// Folder files are pasted into.
    pub target_dir: PathBuf,
    pub menu: MenuState,
    /// Paste waiting for overwrite confirmation.
    pub pending_overwrite: Option<PasteRequest>,
    /// Outcome of the last action.
    pub notice: Option<Notice>,
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl<A: GistApi, C: Clock> App<A, C> {
    pub fn new(service: GistMenuService<A, C>, username: String, target_dir: PathBuf) -> Self {
        Self {
            service,
            username,
            target_dir,
            menu: MenuState::new(),
            pending_overwrite: None,
            notice: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.menu.menu = LoadingState::Loading;
        terminal.draw(|frame| ui::draw(frame, self))?;
        self.load_menu(false);

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Ask the service for the menu. Cheap while the cached menu is fresh.
    pub fn load_menu(&mut self, force: bool) {
        let model = if force {
            self.service.refresh_gist_menu(&self.username)
        } else {
            self.service.fetch_gist_menu(&self.username)
        };
        self.menu.set_menu(model);
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.pending_overwrite.is_some() {
            match code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    if let Some(request) = self.pending_overwrite.take() {
                        self.paste(&request);
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.pending_overwrite = None;
                    self.notice = Some(Notice::info("Paste cancelled"));
                }
                _ => {}
            }
            return;
        }

        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Down | KeyCode::Char('j') => self.menu.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.menu.select_prev(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                if let Some(file) = self.menu.enter() {
                    self.activate_file(&file);
                }
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                if self.menu.back() {
                    // Root menu is being shown again
                    self.load_menu(false);
                }
            }
            KeyCode::Char('r') => {
                self.load_menu(true);
                self.notice = Some(Notice::info("Menu refreshed"));
            }
            _ => {}
        }
    }

    /// Paste a file, asking first if it would replace an existing one.
    fn activate_file(&mut self, file: &GistFileRecord) {
        match PasteRequest::prepare(&self.target_dir, file) {
            Ok(request) if request.overwrites() => self.pending_overwrite = Some(request),
            Ok(request) => self.paste(&request),
            Err(e) => {
                warn!(error = %e, "cannot paste into target");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    fn paste(&mut self, request: &PasteRequest) {
        self.notice = Some(match request.execute(&self.service) {
            Ok(path) => Notice::info(format!("Pasted {}", path.display())),
            Err(e) => {
                warn!(error = %e, file = %request.file.file_name, "paste failed");
                Notice::error(e.to_string())
            }
        });
    }
}
