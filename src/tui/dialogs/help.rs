//! Help dialog
//!
//! Lists every keyboard shortcut, grouped by context

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

const SECTIONS: [KeyContext; 4] = [
    KeyContext::Global,
    KeyContext::Sliders,
    KeyContext::TotalInput,
    KeyContext::Confirm,
];

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Build the help text from the keybinding table
fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for context in SECTIONS {
        lines.push(Line::from(vec![Span::styled(
            context.title(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]));
        for kb in get_keybindings(context) {
            lines.push(key_line(&format_keybinding(kb), kb.description));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_help_lists_every_section() {
        let text = flatten(&help_lines());
        for context in SECTIONS {
            assert!(text.iter().any(|l| l == context.title()));
        }
        assert_eq!(text.last().map(String::as_str), Some("Press any key to close"));
    }

    #[test]
    fn test_help_includes_descriptions() {
        let text = flatten(&help_lines()).join("\n");
        assert!(text.contains("Reset allocations"));
        assert!(text.contains("Keep allocations"));
    }
}
