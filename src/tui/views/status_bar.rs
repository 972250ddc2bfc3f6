//! Status bar view
//!
//! Shows the total budget, the amount used and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str = " q:Quit  ?:Help ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let label = session.currency_label();

    let used_color = if session.remaining().is_zero() {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Total: ", Style::default().fg(Color::White)),
        Span::styled(
            session.total_budget().format_with_label(label),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Used: ", Style::default().fg(Color::White)),
        Span::styled(
            session.total_used().to_string(),
            Style::default().fg(used_color),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
