//! Cancel confirmation dialog
//!
//! Yes resets the allocations. No and Esc both leave them untouched.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const WIDTH: u16 = 56;

/// Render the cancel prompt with `message` as its question
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(WIDTH, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Cancel allotment ")
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(2),    // Question
            Constraint::Length(1), // Answers
            Constraint::Length(1), // Note
        ])
        .split(inner);

    let question = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(question, rows[0]);

    frame.render_widget(
        Paragraph::new(answer_line()).alignment(Alignment::Center),
        rows[1],
    );

    let note = Paragraph::new("[Esc] Dismiss keeps the allocations")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(note, rows[2]);
}

fn answer_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " [Y] Yes ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            " [N] No ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
