// Breadcrumb rendering for the menu trail.
// Shows the current menu path, the paste target, and when the menu was fetched.

use std::path::Path;

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::BreadcrumbNode;

use super::list::format_relative_time;

/// Render the breadcrumb trail with the target folder below it.
pub fn draw_breadcrumb(
    frame: &mut Frame,
    breadcrumbs: &[BreadcrumbNode],
    area: Rect,
    fetched_at: Option<DateTime<Utc>>,
    target_dir: &Path,
) {
    let mut spans = Vec::new();

    for (i, node) in breadcrumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }

        let style = if i == breadcrumbs.len() - 1 {
            // Current level is highlighted
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(node.label.clone(), style));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    // Fetch time on the right of the trail
    if let Some(ts) = fetched_at {
        let fetched = Paragraph::new(Line::from(Span::styled(
            format!("fetched {}", format_relative_time(&ts)),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(fetched, chunks[0]);
    }

    let target_line = Line::from(vec![
        Span::styled("Paste into: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            target_dir.display().to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let target = Paragraph::new(target_line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(target, chunks[1]);
}
