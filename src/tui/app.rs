//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every allocation change goes through the session; the App only tracks
//! selection, input and dialogs.

use crate::config::Settings;
use crate::models::Amount;
use crate::services::session::adjustment_note;
use crate::services::{Adjustment, AllotSession, ConfirmResponse};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Shown when a raise could not take anything from the other sliders
pub const FULLY_ALLOTTED_HINT: &str = "Step too small to rebalance; hold Shift for x10";

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys move and adjust sliders
    #[default]
    Normal,
    /// Keys edit the total budget field
    EditingTotal,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Waiting for an answer to the cancel prompt
    ConfirmCancel(String),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The allotment session being edited
    pub session: AllotSession,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected slider row
    pub selected_index: usize,

    /// Total budget input field
    pub total_input: TextInput,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, session: AllotSession) -> Self {
        Self {
            settings,
            session,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            total_input: TextInput::new().label("Total budget"),
            notifications: NotificationQueue::new(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Number of slider rows
    pub fn row_count(&self) -> usize {
        self.session.categories().len()
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index < self.row_count().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Key of the selected category
    pub fn selected_key(&self) -> Option<String> {
        self.session
            .categories()
            .at(self.selected_index)
            .map(|c| c.key.clone())
    }

    /// Move the selected slider by one step (ten with `coarse`)
    pub fn nudge_selected(&mut self, increase: bool, coarse: bool) {
        let mut step = self.settings.effective_slider_step();
        if coarse {
            step = Amount::new(step.units().saturating_mul(10));
        }

        let current = self.session.allocations().amount_at(self.selected_index);
        let target = if increase {
            current.saturating_add(step)
        } else {
            current.saturating_sub(step)
        };
        self.set_selected(target);
    }

    /// Move the selected slider to an exact amount
    pub fn set_selected(&mut self, amount: Amount) {
        let Some(key) = self.selected_key() else {
            return;
        };

        match self.session.set_category(&key, amount) {
            Ok(adjustment) => self.report_adjustment(&adjustment),
            Err(e) => self.notifications.push(Notification::error(e.to_string())),
        }
        self.check_log();
    }

    /// Start editing the total budget
    pub fn start_editing_total(&mut self) {
        self.total_input = TextInput::new()
            .label("Total budget")
            .suffix(self.session.currency_label())
            .content(self.session.total_budget().to_string())
            .focused(true);
        self.input_mode = InputMode::EditingTotal;
    }

    /// Apply the edited total; allocations are reset
    pub fn apply_total_input(&mut self) {
        let applied = self.session.on_total_budget_changed(self.total_input.value());
        self.finish_editing_total();
        self.selected_index = 0;
        self.notifications.push(Notification::info(format!(
            "Total budget set to {}",
            applied.format_with_label(self.session.currency_label())
        )));
        self.check_log();
    }

    /// Leave the total field without applying it
    pub fn finish_editing_total(&mut self) {
        self.total_input.focused = false;
        self.input_mode = InputMode::Normal;
    }

    /// Ask whether to cancel
    pub fn request_cancel(&mut self) {
        let prompt = self.session.request_cancel();
        self.open_dialog(ActiveDialog::ConfirmCancel(prompt.to_string()));
    }

    /// Answer the cancel prompt
    pub fn resolve_cancel(&mut self, response: ConfirmResponse) {
        self.close_dialog();
        if self.session.resolve_cancel(response) {
            self.selected_index = 0;
            self.notifications.push(Notification::info("Allocations reset"));
        }
        self.check_log();
    }

    /// Allot the budget
    pub fn allot(&mut self) {
        let outcome = self.session.on_finalize_requested();
        let message = outcome.message(self.session.currency_label());
        if outcome.is_allotted() {
            self.selected_index = 0;
            self.notifications.push(Notification::success(message));
        } else {
            self.notifications.push(Notification::warning(message));
        }
        self.check_log();
    }

    fn report_adjustment(&mut self, adjustment: &Adjustment) {
        // Rounded shares can all be zero for a small step, leaving nothing to take
        if adjustment.requested > adjustment.previous && adjustment.is_noop() {
            self.set_status(FULLY_ALLOTTED_HINT);
            return;
        }
        self.clear_status();

        if let Some(note) = adjustment_note(adjustment) {
            self.notifications.push(Notification::info(note));
        }
    }

    fn check_log(&mut self) {
        if let Some(err) = self.session.take_log_error() {
            self.set_status(format!("Activity log: {}", err));
        }
    }
}
