//! Service layer for allot-cli
//!
//! The allocation engine holds the rebalancing rules. The session wraps it
//! with the event surface used by the TUI and the scripted CLI.

pub mod allocation;
pub mod confirm;
pub mod session;

pub use allocation::{Adjustment, AllocationEngine, Reduction};
pub use confirm::{Confirm, ConfirmResponse, FixedAnswer, PromptConfirm};
pub use session::{AllotSession, FinalizeOutcome, RemainingStatus};
