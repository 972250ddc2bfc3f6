//! TUI Views module
//!
//! The allotment popup and the status bar, plus whichever dialog or toast
//! is on top of them.

pub mod popup;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{toast_area, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    popup::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmCancel(message) => dialogs::confirm::render(frame, message),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_area(layout.main, &notification.message);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Amount;
    use crate::services::{AllocationEngine, AllotSession};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

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

    fn app(settings: &Settings) -> App<'_> {
        App::new(
            settings,
            AllotSession::new(AllocationEngine::with_defaults(), "USD"),
        )
    }

    #[test]
    fn test_status_bar() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.set_selected(Amount::new(25));

        let text = screen(&app);
        assert!(text.contains("Total: 100 USD"));
        assert!(text.contains("Used: 25"));
        assert!(text.contains("q:Quit"));
    }

    #[test]
    fn test_confirm_dialog_drawn() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.request_cancel();

        let text = screen(&app);
        assert!(text.contains("Cancel allotment"));
        assert!(text.contains("[Y] Yes"));
    }

    #[test]
    fn test_toast_drawn() {
        let settings = Settings::default();
        let mut app = app(&settings);
        app.allot();

        assert!(screen(&app).contains("Warning"));
    }

    #[test]
    fn test_narrow_terminal_does_not_panic() {
        let settings = Settings::default();
        let app = app(&settings);
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
