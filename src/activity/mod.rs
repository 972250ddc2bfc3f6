//! Activity logging for allot-cli
//!
//! Records every session operation (total changes, slider adjustments,
//! resets and allotments) in an append-only JSONL file. The log is a trail
//! for the user to inspect; it is never read back into engine state.
//!
//! # Example
//!
//! ```rust,ignore
//! use allot::activity::{ActivityEntry, ActivityLogger, Operation};
//!
//! let logger = ActivityLogger::new(paths.activity_log());
//! let entry = ActivityEntry::record(Operation::SetTotal, "total", &100, &250);
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{ActivityEntry, Operation};
pub use logger::ActivityLogger;
