//! Layout definitions for the TUI
//!
//! The screen is a centered popup over the main area, with a status bar at
//! the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the allotment popup
pub const POPUP_WIDTH: u16 = 64;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            main: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Layout inside the allotment popup
pub struct PopupLayout {
    /// Total budget field
    pub total: Rect,
    /// Remaining budget line
    pub remaining: Rect,
    /// One row per category slider
    pub sliders: Vec<Rect>,
    /// Cancel / Allot buttons
    pub buttons: Rect,
    /// Key hints
    pub hints: Rect,
}

impl PopupLayout {
    /// Rows needed inside the border for `slider_count` sliders
    pub fn content_height(slider_count: usize) -> u16 {
        // total, remaining, gap, sliders, gap, buttons, hints
        slider_count as u16 + 6
    }

    /// Calculate the popup layout for its inner area
    pub fn new(inner: Rect, slider_count: usize) -> Self {
        let mut constraints = vec![
            Constraint::Length(1), // Total budget
            Constraint::Length(1), // Remaining
            Constraint::Length(1), // Gap
        ];
        constraints.extend((0..slider_count).map(|_| Constraint::Length(1)));
        constraints.extend([
            Constraint::Length(1), // Gap
            Constraint::Length(1), // Buttons
            Constraint::Min(1),    // Hints
        ]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        Self {
            total: chunks[0],
            remaining: chunks[1],
            sliders: chunks[3..3 + slider_count].to_vec(),
            buttons: chunks[4 + slider_count],
            hints: chunks[5 + slider_count],
        }
    }
}

/// Layout for one slider row: label, gauge, value
pub struct SliderLayout {
    pub label: Rect,
    pub gauge: Rect,
    pub value: Rect,
}

impl SliderLayout {
    pub fn new(row: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(16), // Marker + label
                Constraint::Min(10),    // Gauge
                Constraint::Length(10), // Value
            ])
            .split(row);

        Self {
            label: chunks[0],
            gauge: chunks[1],
            value: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
