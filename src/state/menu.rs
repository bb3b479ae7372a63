// Menu state management.
// Tracks the loaded menu model, the navigation level, and list selection.

use std::sync::Arc;

use ratatui::widgets::ListState;

use crate::github::{GistFileRecord, GistRecord, MenuModel};

use super::navigation::{NavigationStack, ViewLevel};

/// Loading state for menu data.
#[derive(Debug, Clone)]
pub enum LoadingState<T> {
    Idle,
    Loading,
    Loaded(T),
}

impl<T> Default for LoadingState<T> {
    fn default() -> Self {
        LoadingState::Idle
    }
}

impl<T> LoadingState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// State of the two-level gist menu.
#[derive(Debug, Default)]
pub struct MenuState {
    pub nav: NavigationStack,
    pub menu: LoadingState<Arc<MenuModel>>,
    pub gist_list: ListState,
    pub file_list: ListState,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly fetched model.
    ///
    /// The same model coming back from the cache keeps the current position.
    /// A different model resets navigation to the root.
    pub fn set_menu(&mut self, model: Arc<MenuModel>) {
        let unchanged = self
            .menu
            .data()
            .is_some_and(|current| Arc::ptr_eq(current, &model));
        if unchanged {
            return;
        }

        let first = if model.gists().is_empty() { None } else { Some(0) };
        self.menu = LoadingState::Loaded(model);
        self.nav.reset();
        self.gist_list.select(first);
        self.file_list.select(None);
    }

    pub fn gists(&self) -> &[GistRecord] {
        self.menu.data().map(|model| model.gists()).unwrap_or_default()
    }

    /// Gist whose files are being shown, if any.
    pub fn open_gist(&self) -> Option<&GistRecord> {
        match self.nav.current() {
            ViewLevel::Files { gist_index, .. } => self.gists().get(*gist_index),
            ViewLevel::Gists => None,
        }
    }

    pub fn selected_gist(&self) -> Option<&GistRecord> {
        self.gist_list.selected().and_then(|i| self.gists().get(i))
    }

    pub fn selected_file(&self) -> Option<&GistFileRecord> {
        let gist = self.open_gist()?;
        self.file_list.selected().and_then(|i| gist.files.get(i))
    }

    fn active_len(&self) -> usize {
        match self.nav.current() {
            ViewLevel::Gists => self.gists().len(),
            ViewLevel::Files { .. } => self.open_gist().map_or(0, |gist| gist.files.len()),
        }
    }

    fn active_list(&mut self) -> &mut ListState {
        match self.nav.current() {
            ViewLevel::Gists => &mut self.gist_list,
            ViewLevel::Files { .. } => &mut self.file_list,
        }
    }

    /// Select the next item in the active list.
    pub fn select_next(&mut self) {
        let len = self.active_len();
        if len == 0 {
            return;
        }
        let list = self.active_list();
        let i = match list.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i, // Stay at end
            None => 0,
        };
        list.select(Some(i));
    }

    /// Select the previous item in the active list.
    pub fn select_prev(&mut self) {
        if self.active_len() == 0 {
            return;
        }
        let list = self.active_list();
        let i = list.selected().map_or(0, |i| i.saturating_sub(1));
        list.select(Some(i));
    }

    /// Activate the selected item.
    ///
    /// On the gist level this opens the gist's files. On the file level it
    /// returns the file to paste.
    pub fn enter(&mut self) -> Option<GistFileRecord> {
        if matches!(self.nav.current(), ViewLevel::Files { .. }) {
            return self.selected_file().cloned();
        }

        let index = self.gist_list.selected()?;
        let description = self.gists().get(index)?.description.clone();
        self.nav.push(ViewLevel::Files {
            gist_index: index,
            description,
        });
        self.file_list.select(Some(0));
        None
    }

    /// Go back one level. Returns true if the root is now showing.
    pub fn back(&mut self) -> bool {
        if self.nav.pop() {
            self.file_list.select(None);
            true
        } else {
            false
        }
    }
}
