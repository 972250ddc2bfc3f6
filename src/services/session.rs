//! Allotment session
//!
//! The call surface a presentation layer drives: raw input events in, state
//! reads out. Wraps the allocation engine, handles the cancel confirmation,
//! and records each operation in the activity log.

use crate::activity::{ActivityEntry, ActivityLogger, Operation};
use crate::config::{AllotPaths, Settings};
use crate::error::AllotResult;
use crate::models::{AllocationState, Allotment, Amount, CategorySet};

use super::allocation::{Adjustment, AllocationEngine};
use super::confirm::{Confirm, ConfirmResponse};

/// Message shown when asking whether to throw allocations away
pub const CANCEL_PROMPT: &str = "Are you sure you want to cancel? All allocations will be reset.";

/// Warning shown when allotting with nothing allocated
pub const NOTHING_ALLOCATED_WARNING: &str = "Please allocate some budget before allotting.";

/// What is left of the budget, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainingStatus {
    AllAllotted,
    Remaining(Amount),
}

impl RemainingStatus {
    pub fn from_remaining(remaining: Amount) -> Self {
        if remaining.is_zero() {
            Self::AllAllotted
        } else {
            Self::Remaining(remaining)
        }
    }

    /// "All budget allotted" or "Remaining: 70 USD"
    pub fn describe(&self, currency_label: &str) -> String {
        match self {
            Self::AllAllotted => "All budget allotted".to_string(),
            Self::Remaining(amount) => {
                format!("Remaining: {}", amount.format_with_label(currency_label))
            }
        }
    }

    pub fn is_all_allotted(&self) -> bool {
        matches!(self, Self::AllAllotted)
    }
}

/// Result of asking to allot the budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalizeOutcome {
    /// The budget was allotted and the session reset
    Allotted(Allotment),
    /// Nothing was allocated; state is unchanged
    NothingAllocated,
}

impl FinalizeOutcome {
    pub fn is_allotted(&self) -> bool {
        matches!(self, Self::Allotted(_))
    }

    /// Message to surface to the user
    pub fn message(&self, currency_label: &str) -> String {
        match self {
            Self::Allotted(allotment) => format!(
                "Budget allotted: {} of {}",
                allotment.used,
                allotment.total_budget.format_with_label(currency_label)
            ),
            Self::NothingAllocated => NOTHING_ALLOCATED_WARNING.to_string(),
        }
    }
}

/// One interactive allotment session
#[derive(Debug)]
pub struct AllotSession {
    engine: AllocationEngine,
    logger: Option<ActivityLogger>,
    currency_label: String,
    pending_cancel: bool,
    last_log_error: Option<String>,
}

impl AllotSession {
    /// Create a session around an engine
    pub fn new(engine: AllocationEngine, currency_label: impl Into<String>) -> Self {
        Self {
            engine,
            logger: None,
            currency_label: currency_label.into(),
            pending_cancel: false,
            last_log_error: None,
        }
    }

    /// Build a session from user settings
    ///
    /// Fails only when the configured categories are invalid.
    pub fn from_settings(settings: &Settings, paths: &AllotPaths) -> AllotResult<Self> {
        let categories = settings.category_set()?;
        let engine = AllocationEngine::new(categories, settings.default_total_budget);
        let mut session = Self::new(engine, settings.currency_label.clone());

        if settings.activity_log_enabled {
            session = session.with_logger(ActivityLogger::new(paths.activity_log()));
        }

        Ok(session)
    }

    /// Record operations to an activity log
    pub fn with_logger(mut self, logger: ActivityLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    // --- inputs ---

    /// Total budget input changed; returns the total actually applied
    pub fn on_total_budget_changed(&mut self, raw: &str) -> Amount {
        let before = self.engine.total_budget();
        let applied = self.engine.set_total_budget_raw(raw);
        self.pending_cancel = false;

        let entry = ActivityEntry::record(
            Operation::SetTotal,
            "total",
            &before.units(),
            &applied.units(),
        );
        self.log(entry);

        applied
    }

    /// A slider moved; unparseable input counts as zero
    pub fn on_category_slider_changed(&mut self, key: &str, raw: &str) -> AllotResult<Adjustment> {
        self.set_category(key, Amount::coerce(raw, Amount::zero()))
    }

    /// Move a category to an already-parsed amount
    pub fn set_category(&mut self, key: &str, requested: Amount) -> AllotResult<Adjustment> {
        let before = self.engine.allocations().snapshot();
        let adjustment = self.engine.adjust_category(key, requested)?;

        if !adjustment.is_noop() {
            let after = self.engine.allocations().snapshot();
            let mut entry = ActivityEntry::record(Operation::Adjust, key, &before, &after);
            if let Some(note) = adjustment_note(&adjustment) {
                entry = entry.with_note(note);
            }
            self.log(entry);
        }

        Ok(adjustment)
    }

    /// Start a cancel; the caller shows the returned prompt and later calls
    /// `resolve_cancel` with the answer
    pub fn request_cancel(&mut self) -> &'static str {
        self.pending_cancel = true;
        CANCEL_PROMPT
    }

    /// Whether a cancel is waiting for an answer
    pub fn is_cancel_pending(&self) -> bool {
        self.pending_cancel
    }

    /// Finish a pending cancel. Returns true when allocations were reset.
    ///
    /// Without a pending cancel the answer is ignored.
    pub fn resolve_cancel(&mut self, response: ConfirmResponse) -> bool {
        if !std::mem::take(&mut self.pending_cancel) {
            return false;
        }
        if !response.is_affirmative() {
            return false;
        }

        let before = self.engine.allocations().snapshot();
        self.engine.reset();
        let after = self.engine.allocations().snapshot();

        self.log(
            ActivityEntry::record(Operation::Reset, "session", &before, &after)
                .with_note(format!("total restored to {}", self.engine.total_budget())),
        );
        true
    }

    /// Ask through `confirm` and reset on yes. Returns true when reset.
    pub fn on_cancel_requested<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> bool {
        let prompt = self.request_cancel();
        let response = confirm.confirm(prompt);
        self.resolve_cancel(response)
    }

    /// Allot the budget if anything is allocated
    pub fn on_finalize_requested(&mut self) -> FinalizeOutcome {
        if !self.engine.can_finalize() {
            return FinalizeOutcome::NothingAllocated;
        }

        let allotment = Allotment::capture(self.engine.total_budget(), self.engine.allocations());
        self.log(ActivityEntry::outcome(Operation::Allot, "session", &allotment));
        self.engine.reset();
        self.pending_cancel = false;

        FinalizeOutcome::Allotted(allotment)
    }

    // --- reads ---

    pub fn total_budget(&self) -> Amount {
        self.engine.total_budget()
    }

    pub fn allocations(&self) -> &AllocationState {
        self.engine.allocations()
    }

    pub fn categories(&self) -> &CategorySet {
        self.engine.categories()
    }

    pub fn total_used(&self) -> Amount {
        self.engine.total_used()
    }

    pub fn remaining(&self) -> Amount {
        self.engine.remaining()
    }

    pub fn remaining_status(&self) -> RemainingStatus {
        RemainingStatus::from_remaining(self.engine.remaining())
    }

    pub fn can_finalize(&self) -> bool {
        self.engine.can_finalize()
    }

    pub fn currency_label(&self) -> &str {
        &self.currency_label
    }

    pub fn engine(&self) -> &AllocationEngine {
        &self.engine
    }

    /// Most recent activity log failure, cleared on read
    pub fn take_log_error(&mut self) -> Option<String> {
        self.last_log_error.take()
    }

    fn log(&mut self, entry: ActivityEntry) {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.log(&entry) {
                self.last_log_error = Some(e.to_string());
            }
        }
    }
}

/// Short summary of what an adjustment did to the other categories
pub fn adjustment_note(adjustment: &Adjustment) -> Option<String> {
    let mut parts: Vec<String> = adjustment
        .reductions
        .iter()
        .map(|r| format!("{} -{}", r.category, r.amount()))
        .collect();

    if adjustment.clamped_by.is_positive() {
        parts.push(format!(
            "{} clamped by {}",
            adjustment.category, adjustment.clamped_by
        ));
    }

    if parts.is_empty() {
        None
    } else {
        Some(format!("redistributed: {}", parts.join(", ")))
    }
}
