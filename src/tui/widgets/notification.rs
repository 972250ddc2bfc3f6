//! Toast notification widget
//!
//! Short-lived messages for allotments, resets and redistribution.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Most toasts kept waiting at once
const MAX_QUEUED: usize = 3;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    /// Get the color for this notification type
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Get the title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Allotted",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    fn default_duration(&self) -> Duration {
        match self {
            Self::Info => Duration::from_secs(2),
            Self::Success | Self::Warning => Duration::from_secs(3),
            Self::Error => Duration::from_secs(5),
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Type of notification
    pub notification_type: NotificationType,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    /// How long to display it
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.default_duration(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Set how long the notification stays up
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();
        let title = self.notification.notification_type.title();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Area for a toast in the top-right corner of `frame`
pub fn toast_area(frame: Rect, message: &str) -> Rect {
    let width = (message.chars().count() as u16 + 4).clamp(24, 48).min(frame.width);
    let inner_width = width.saturating_sub(2).max(1);
    let lines = (message.chars().count() as u16).div_ceil(inner_width).max(1);
    let height = (lines + 2).min(frame.height);
    Rect::new(
        frame.x + frame.width.saturating_sub(width + 1),
        frame.y + 1.min(frame.height.saturating_sub(height)),
        width,
        height,
    )
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification, replacing an identical one and dropping the oldest
    /// when full
    pub fn push(&mut self, notification: Notification) {
        self.notifications.retain(|n| {
            n.message != notification.message
                || n.notification_type != notification.notification_type
        });
        if self.notifications.len() >= MAX_QUEUED {
            self.notifications.remove(0);
        }
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Info.color(), Color::Blue);
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Warning.color(), Color::Yellow);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_queue_order_and_limit() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        for message in ["one", "two", "three", "four"] {
            queue.push(Notification::info(message));
        }

        assert_eq!(queue.len(), MAX_QUEUED);
        assert_eq!(queue.current().unwrap().message, "two");
    }

    #[test]
    fn test_duplicate_replaced() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("redistributed: cpu -1"));
        queue.push(Notification::info("redistributed: cpu -1"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_expiry() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("gone").with_duration(Duration::ZERO));
        queue.push(Notification::warning("stays"));

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "stays");
    }

    #[test]
    fn test_toast_area_fits() {
        let frame = Rect::new(0, 0, 80, 24);
        let area = toast_area(frame, "Budget allotted: 99 of 100 USD");
        assert!(area.right() <= frame.right());
        assert!(area.bottom() <= frame.bottom());
        assert_eq!(area.height, 3);

        let tiny = Rect::new(0, 0, 10, 2);
        let area = toast_area(tiny, "Please allocate some budget before allotting.");
        assert!(area.width <= 10);
        assert!(area.height <= 2);
    }
}
