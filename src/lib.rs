//! allot-cli - Terminal budget allotment widget
//!
//! This library provides the core of the allot-cli application: a total
//! budget divided between a fixed set of categories by sliders. When a slider
//! change would overspend the total, the other categories give back the
//! difference in proportion to what they currently hold.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Amounts, categories and allocation state
//! - `services`: Allocation engine, session controller and confirmations
//! - `activity`: Append-only activity log
//! - `display`: Plain-text tables for the CLI
//! - `cli`: Non-interactive subcommands
//! - `tui`: The interactive popup
//!
//! # Example
//!
//! ```rust,ignore
//! use allot::config::{AllotPaths, Settings};
//! use allot::services::AllotSession;
//!
//! let paths = AllotPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut session = AllotSession::from_settings(&settings, &paths)?;
//! session.on_category_slider_changed("cpu", "60")?;
//! ```

pub mod activity;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{AllotError, AllotResult};
