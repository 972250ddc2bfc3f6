//! Numeric input widget
//!
//! A single-line field for whole amounts, with cursor support and an
//! optional unit suffix (e.g., the currency label).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Longest amount the field accepts, in digits
pub const MAX_DIGITS: usize = 12;

/// A numeric text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content (ASCII digits only)
    pub content: String,
    /// Cursor position
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Label
    pub label: String,
    /// Text shown after the value
    pub suffix: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the suffix
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set content, keeping only digits
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content
            .into()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(MAX_DIGITS)
            .collect();
        self.cursor = self.content.len();
        self
    }

    /// Insert a digit at the cursor; anything else is ignored
    pub fn insert(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.content.len() >= MAX_DIGITS {
            return false;
        }
        self.content.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.len() + 2
        };

        let input_start = area.x + label_width as u16;
        let right_edge = area.x + area.width;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let text_style = if self.focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        buf.set_string(input_start, area.y, &self.content, text_style);

        // one extra cell for the cursor at the end of the text
        let suffix_x = input_start + self.content.len() as u16 + 1;
        if !self.suffix.is_empty() && suffix_x < right_edge {
            buf.set_string(
                suffix_x,
                area.y,
                &self.suffix,
                Style::default().fg(Color::DarkGray),
            );
        }

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < right_edge {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
