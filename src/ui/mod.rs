// UI module for rendering the menu.
// Contains widgets for the breadcrumb, gist and file lists, and dialogs.

mod breadcrumb;
mod list;
mod modal;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::cache::Clock;
use crate::github::GistApi;
use crate::state::{NoticeLevel, ViewLevel};

/// Main draw function that renders the entire UI.
pub fn draw<A: GistApi, C: Clock>(frame: &mut Frame, app: &mut App<A, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb and target
            Constraint::Min(1),    // Menu
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let breadcrumbs = app.menu.nav.breadcrumbs();
    breadcrumb::draw_breadcrumb(
        frame,
        &breadcrumbs,
        chunks[0],
        app.service.menu_fetched_at(),
        &app.target_dir,
    );

    if matches!(app.menu.nav.current(), ViewLevel::Files { .. }) {
        list::render_files_list(frame, &mut app.menu, chunks[1]);
    } else {
        list::render_gists_list(frame, &mut app.menu, chunks[1]);
    }

    draw_notice(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    if let Some(request) = &app.pending_overwrite {
        modal::draw_overwrite_modal(frame, &request.target);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the outcome of the last action.
fn draw_notice<A: GistApi, C: Clock>(frame: &mut Frame, app: &App<A, C>, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let (icon, color) = match notice.level {
        NoticeLevel::Error => ("❌", Color::Red),
        NoticeLevel::Info => ("ℹ️", Color::Cyan),
    };

    let line = Line::from(vec![
        Span::raw(format!(" {} ", icon)),
        Span::styled(notice.message.clone(), Style::default().fg(color)),
        Span::styled(
            format!("  {}", notice.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar with keybinding hints and rate limit.
fn draw_status_bar<A: GistApi, C: Clock>(frame: &mut Frame, app: &App<A, C>, area: Rect) {
    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↵ "),
        Span::styled("Select", Style::default().fg(Color::DarkGray)),
        Span::raw("  Esc "),
        Span::styled("Back", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    // Add rate limit info on the right if available
    if let Some(rate) = app.service.rate_limit() {
        let rate_color = if rate.remaining < 10 {
            Color::Red
        } else if rate.remaining < 30 {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        hints.push(Span::styled(
            format!("  API: {}/{}", rate.remaining, rate.limit),
            Style::default().fg(rate_color),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 50.min(area.width);
    let popup_height = 14.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("  ↑/↓ or j/k    ", "Navigate list"),
        key("  Enter or l    ", "Open gist / paste file"),
        key("  Esc or h      ", "Go back"),
        key("  r             ", "Refetch gists now"),
        key("  ?             ", "Show/hide this help"),
        key("  q             ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("The menu is cached for ", Style::default().fg(Color::DarkGray)),
            Span::styled("15 minutes", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    use super::*;
    use crate::service::GistMenuService;
    use crate::testing::FakeApi;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(app: &mut App<FakeApi>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_renders_gists() {
        let dir = TempDir::new().unwrap();
        let api = FakeApi::new().with_list_body(
            r#"[{"description":"dotfiles","files":{".vimrc":{"raw_url":"http://x/v"}}}]"#,
        );
        let mut app = App::new(
            GistMenuService::new(api),
            "octocat".to_string(),
            dir.path().to_path_buf(),
        );
        app.load_menu(false);

        let screen = render(&mut app);
        assert!(screen.contains("Paste from GitHub Gists"));
        assert!(screen.contains("dotfiles"));
        assert!(screen.contains("1 file"));
    }

    #[test]
    fn test_renders_failure_message() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(
            GistMenuService::new(FakeApi::new()),
            String::new(),
            dir.path().to_path_buf(),
        );
        app.load_menu(false);

        let screen = render(&mut app);
        assert!(screen.contains("No username supplied..."));
    }

    #[test]
    fn test_renders_overwrite_modal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".vimrc"), "old").unwrap();
        let api = FakeApi::new().with_list_body(
            r#"[{"description":"dotfiles","files":{".vimrc":{"raw_url":"http://x/v"}}}]"#,
        );
        let mut app = App::new(
            GistMenuService::new(api),
            "octocat".to_string(),
            dir.path().to_path_buf(),
        );
        app.load_menu(false);
        app.handle_key(crossterm::event::KeyCode::Enter);
        app.handle_key(crossterm::event::KeyCode::Enter);

        let screen = render(&mut app);
        assert!(screen.contains("overwrite the existing file?"));
    }
}
