//! Core data models for allot-cli
//!
//! This module contains the data structures of the allotment domain: amounts,
//! categories, and the per-category allocation state.

pub mod allocation;
pub mod amount;
pub mod category;

pub use allocation::{Allocation, AllocationState, Allotment};
pub use amount::{Amount, AmountParseError};
pub use category::{Category, CategorySet, CategoryValidationError, DefaultCategory};
