//! Allocation models
//!
//! Tracks how much of the total budget is assigned to each category, and the
//! summary produced when the user allots the budget.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::{Category, CategorySet};

/// The amount assigned to one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// The category this allocation is for
    pub category: Category,

    /// Amount assigned
    pub amount: Amount,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category.label, self.amount)
    }
}

/// Per-category allocations in declaration order
///
/// Keys are fixed when the state is created. Only the amounts change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationState {
    entries: Vec<Allocation>,
}

impl AllocationState {
    /// Create a state with every category at zero
    pub fn zeroed(categories: &CategorySet) -> Self {
        Self {
            entries: categories
                .iter()
                .map(|category| Allocation {
                    category: category.clone(),
                    amount: Amount::zero(),
                })
                .collect(),
        }
    }

    /// Set every allocation back to zero
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            entry.amount = Amount::zero();
        }
    }

    /// Amount for a category key
    pub fn get(&self, key: &str) -> Option<Amount> {
        self.entries
            .iter()
            .find(|e| e.category.key == key)
            .map(|e| e.amount)
    }

    /// Position of a category key
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.category.key == key)
    }

    /// Amount at a position (zero when out of range)
    pub fn amount_at(&self, index: usize) -> Amount {
        self.entries
            .get(index)
            .map(|e| e.amount)
            .unwrap_or_default()
    }

    /// Overwrite the amount at a position
    pub(crate) fn set_at(&mut self, index: usize, amount: Amount) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.amount = amount;
        }
    }

    /// Sum of every allocation
    pub fn total(&self) -> Amount {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Sum of every allocation except the one at `index`
    pub fn total_excluding(&self, index: usize) -> Amount {
        self.entries
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, e)| e.amount)
            .sum()
    }

    /// Check if every allocation is zero
    pub fn is_all_zero(&self) -> bool {
        self.entries.iter().all(|e| e.amount.is_zero())
    }

    /// Iterate in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Allocation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flat `{key: amount}` JSON object, used for activity log diffs
    pub fn snapshot(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|e| (e.category.key.clone(), serde_json::Value::from(e.amount.units())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

impl<'a> IntoIterator for &'a AllocationState {
    type Item = &'a Allocation;
    type IntoIter = std::slice::Iter<'a, Allocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A finalized distribution of the budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allotment {
    /// Total budget at the time of allotment
    pub total_budget: Amount,

    /// Per-category amounts in declaration order
    pub allocations: Vec<Allocation>,

    /// Sum of all allocations
    pub used: Amount,

    /// Budget left unassigned
    pub remaining: Amount,

    /// When the budget was allotted
    pub allotted_at: DateTime<Utc>,
}

impl Allotment {
    /// Capture the current allocations against a total
    pub fn capture(total_budget: Amount, state: &AllocationState) -> Self {
        let used = state.total();
        Self {
            total_budget,
            allocations: state.iter().cloned().collect(),
            used,
            remaining: total_budget.saturating_sub(used),
            allotted_at: Utc::now(),
        }
    }

    /// Amount for a category key
    pub fn amount_for(&self, key: &str) -> Option<Amount> {
        self.allocations
            .iter()
            .find(|a| a.category.key == key)
            .map(|a| a.amount)
    }
}

impl fmt::Display for Allotment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.allocations.iter().map(|a| a.to_string()).collect();
        write!(
            f,
            "{} of {} allotted ({})",
            self.used,
            self.total_budget,
            parts.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(amounts: &[u64]) -> AllocationState {
        let mut state = AllocationState::zeroed(&CategorySet::defaults());
        for (i, units) in amounts.iter().enumerate() {
            state.set_at(i, Amount::new(*units));
        }
        state
    }

    #[test]
    fn test_zeroed() {
        let state = AllocationState::zeroed(&CategorySet::defaults());
        assert_eq!(state.len(), 4);
        assert!(state.is_all_zero());
        assert_eq!(state.total(), Amount::zero());
    }

    #[test]
    fn test_totals() {
        let state = state_with(&[50, 30, 0, 0]);
        assert_eq!(state.total(), Amount::new(80));
        assert_eq!(state.total_excluding(2), Amount::new(80));
        assert_eq!(state.total_excluding(0), Amount::new(30));
        assert_eq!(state.get("gpu"), Some(Amount::new(30)));
        assert_eq!(state.get("disk"), None);
    }

    #[test]
    fn test_clear() {
        let mut state = state_with(&[10, 20, 30, 40]);
        state.clear();
        assert!(state.is_all_zero());
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn test_snapshot() {
        let state = state_with(&[10, 0, 5, 0]);
        let snapshot = state.snapshot();
        assert_eq!(snapshot["cpu"], 10);
        assert_eq!(snapshot["memory"], 5);
        assert_eq!(snapshot["other"], 0);
    }

    #[test]
    fn test_allotment_capture() {
        let state = state_with(&[37, 22, 40, 0]);
        let allotment = Allotment::capture(Amount::new(100), &state);

        assert_eq!(allotment.used, Amount::new(99));
        assert_eq!(allotment.remaining, Amount::new(1));
        assert_eq!(allotment.amount_for("memory"), Some(Amount::new(40)));
        assert!(allotment.to_string().starts_with("99 of 100 allotted"));
    }

    #[test]
    fn test_serialization() {
        let state = state_with(&[1, 2, 3, 4]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: AllocationState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
