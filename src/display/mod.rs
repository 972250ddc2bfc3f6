//! Display formatting for terminal output
//!
//! Provides utilities for formatting allocations and allotments for the
//! non-interactive commands.

pub mod allocation;
pub mod report;

pub use allocation::{format_allocation_table, format_allotment, format_category_list};
