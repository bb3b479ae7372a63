// Modal UI components.
// Confirmation dialog shown before a paste replaces an existing file.

use std::path::Path;

use ratatui::{prelude::*, widgets::*};

/// Draw the overwrite confirmation modal on top of the current view.
pub fn draw_overwrite_modal(frame: &mut Frame, target: &Path) {
    let area = frame.area();

    // Create centered modal
    let modal_width = 60.min(area.width);
    let modal_height = 7.min(area.height);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" File exists ");

    let text = vec![
        Line::from("Would you like to overwrite the existing file?"),
        Line::from(Span::styled(
            target.display().to_string(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y", Style::default().fg(Color::Yellow)),
            Span::styled(" = Overwrite  ", Style::default().fg(Color::DarkGray)),
            Span::styled("n/Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" = Cancel ", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let modal = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(modal, modal_area);
}
