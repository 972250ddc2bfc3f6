//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the allotment popup

pub mod confirm;
pub mod help;
