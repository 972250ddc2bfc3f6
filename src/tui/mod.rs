//! Terminal User Interface module
//!
//! The interactive allotment popup built on ratatui: one slider per
//! category, an editable total, and the cancel and allot actions.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
