//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session layer.

pub mod categories;
pub mod log;
pub mod simulate;

pub use categories::handle_categories_command;
pub use log::handle_log_command;
pub use simulate::{handle_simulate_command, SimulateArgs, Step};
