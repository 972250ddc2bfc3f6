//! Configuration module for allot-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (default total, categories, currency label)

pub mod paths;
pub mod settings;

pub use paths::AllotPaths;
pub use settings::Settings;
