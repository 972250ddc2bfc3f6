//! Allotment popup
//!
//! The main screen: total budget, remaining budget, one slider per category
//! and the Cancel / Allot buttons.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::services::RemainingStatus;
use crate::tui::app::{App, InputMode};
use crate::tui::keybindings::hint_line;
use crate::tui::layout::{centered_rect_fixed, PopupLayout, SliderLayout, POPUP_WIDTH};

/// Popup title
pub const TITLE: &str = "Allot your budget and divide it later";

/// Slider colours, cycled by category position
const SLIDER_COLORS: [Color; 4] = [
    Color::Rgb(0x4F, 0x8E, 0xF7),
    Color::Rgb(0xF7, 0x6C, 0x5E),
    Color::Rgb(0x43, 0xD9, 0xAD),
    Color::Rgb(0xF7, 0xC9, 0x48),
];

/// Colour for the slider at `index`
pub fn slider_color(index: usize) -> Color {
    SLIDER_COLORS[index % SLIDER_COLORS.len()]
}

/// Render the popup
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let slider_count = app.row_count();
    let height = PopupLayout::content_height(slider_count) + 2;
    let popup = centered_rect_fixed(POPUP_WIDTH, height, area);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" {} ", TITLE))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let layout = PopupLayout::new(inner, slider_count);

    render_total(frame, app, layout.total);
    render_remaining(frame, app, layout.remaining);
    for (index, row) in layout.sliders.iter().enumerate() {
        render_slider(frame, app, index, *row);
    }
    render_buttons(frame, app, layout.buttons);

    let hints = Paragraph::new(hint_line())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, layout.hints);
}

fn render_total(frame: &mut Frame, app: &App, area: Rect) {
    if app.input_mode == InputMode::EditingTotal {
        frame.render_widget(app.total_input.clone(), area);
        return;
    }

    let line = Line::from(vec![
        Span::styled("Total budget: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.session.total_budget().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.session.currency_label().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_remaining(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.session.remaining_status();
    let color = match status {
        RemainingStatus::AllAllotted => Color::Red,
        RemainingStatus::Remaining(_) => Color::Green,
    };

    let text = status.describe(app.session.currency_label());
    let paragraph = Paragraph::new(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(paragraph, area);
}

fn render_slider(frame: &mut Frame, app: &App, index: usize, row: Rect) {
    let Some(allocation) = app.session.allocations().iter().nth(index) else {
        return;
    };

    let layout = SliderLayout::new(row);
    let color = slider_color(index);
    let selected = index == app.selected_index && app.input_mode == InputMode::Normal;

    let marker = if selected { "▶ " } else { "  " };
    let mut label_style = Style::default().fg(color);
    if selected {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    let label = Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::White)),
        Span::styled(allocation.category.label.clone(), label_style),
    ]);
    frame.render_widget(Paragraph::new(label), layout.label);

    let total = app.session.total_budget().units();
    let ratio = if total == 0 {
        0.0
    } else {
        (allocation.amount.units() as f64 / total as f64).clamp(0.0, 1.0)
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Rgb(0x2A, 0x2A, 0x2A)))
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, layout.gauge);

    let value = Paragraph::new(Span::styled(
        format!("{} {}", allocation.amount, app.session.currency_label()),
        Style::default().fg(color),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(value, layout.value);
}

fn render_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let allot_style = if app.session.can_finalize() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    };

    let line = Line::from(vec![
        Span::styled(
            " Cancel (c) ",
            Style::default().fg(Color::White).bg(Color::Red),
        ),
        Span::raw("    "),
        Span::styled(" Allot (a) ", allot_style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Amount;
    use crate::services::{AllocationEngine, AllotSession};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_slider_colors_cycle() {
        assert_eq!(slider_color(0), Color::Rgb(0x4F, 0x8E, 0xF7));
        assert_eq!(slider_color(4), slider_color(0));
    }

    #[test]
    fn test_popup_contents() {
        let settings = Settings::default();
        let mut app = App::new(
            &settings,
            AllotSession::new(AllocationEngine::with_defaults(), "USD"),
        );
        app.set_selected(Amount::new(30));

        let screen = draw(&app);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Total budget: 100 USD"));
        assert!(screen.contains("Remaining: 70 USD"));
        assert!(screen.contains("▶ CPU"));
        assert!(screen.contains("Memory"));
        assert!(screen.contains("Allot (a)"));
    }

    #[test]
    fn test_popup_all_allotted() {
        let settings = Settings::default();
        let mut app = App::new(
            &settings,
            AllotSession::new(AllocationEngine::with_defaults(), "USD"),
        );
        app.set_selected(Amount::new(100));

        assert!(draw(&app).contains("All budget allotted"));
    }
}
