// List rendering for the gist menu.
// Provides styled list views with loading, error, and empty states.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::{LoadingState, MenuState};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render a failed menu as a single error row.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title(" Gists "));
    frame.render_widget(text, area);
}

fn selectable_list<'a>(items: Vec<ListItem<'a>>, title: &'a str) -> List<'a> {
    List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
}

/// Render the top level: one row per gist.
pub fn render_gists_list(frame: &mut Frame, menu: &mut MenuState, area: Rect) {
    let model = match &menu.menu {
        LoadingState::Idle | LoadingState::Loading => {
            render_loading(frame, area, "Loading gists");
            return;
        }
        LoadingState::Loaded(model) => model.clone(),
    };

    if !model.success {
        render_error(frame, area, &model.message);
        return;
    }

    let items: Vec<ListItem> = model
        .gists()
        .iter()
        .map(|gist| {
            let count = if gist.files.len() == 1 {
                "1 file".to_string()
            } else {
                format!("{} files", gist.files.len())
            };
            ListItem::new(Line::from(vec![
                Span::styled(gist.description.clone(), Style::default().fg(Color::Cyan)),
                Span::styled(format!("  {}", count), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    frame.render_stateful_widget(
        selectable_list(items, " Gists "),
        area,
        &mut menu.gist_list,
    );
}

/// Render the files of the open gist.
pub fn render_files_list(frame: &mut Frame, menu: &mut MenuState, area: Rect) {
    let items: Vec<ListItem> = menu
        .open_gist()
        .map(|gist| {
            gist.files
                .iter()
                .map(|file| {
                    ListItem::new(Line::from(vec![
                        Span::raw("📄 "),
                        Span::styled(file.file_name.clone(), Style::default().fg(Color::White)),
                    ]))
                })
                .collect()
        })
        .unwrap_or_default();

    frame.render_stateful_widget(
        selectable_list(items, " Files "),
        area,
        &mut menu.file_list,
    );
}
