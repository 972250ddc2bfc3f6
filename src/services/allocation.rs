//! Allocation engine
//!
//! Owns the total budget and the per-category allocations. Raising one
//! category past the budget shrinks the others in proportion to their share
//! of what they hold together, so the sum never exceeds the total.

use serde::Serialize;

use crate::error::{AllotError, AllotResult};
use crate::models::{Amount, AllocationState, CategorySet};

/// Smallest total budget the engine accepts
pub const MIN_TOTAL_BUDGET: Amount = Amount::new(1);

/// Total budget used when nothing else is configured
pub const DEFAULT_TOTAL_BUDGET: Amount = Amount::new(100);

/// How much one category lost during redistribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    pub category: String,
    pub before: Amount,
    pub after: Amount,
}

impl Reduction {
    /// Amount taken from the category
    pub fn amount(&self) -> Amount {
        self.before - self.after
    }
}

/// Outcome of a single category adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    /// Category that was adjusted
    pub category: String,

    /// Value before the adjustment
    pub previous: Amount,

    /// Requested value after clamping to the total budget
    pub requested: Amount,

    /// Value the category ended up with
    pub applied: Amount,

    /// Other categories shrunk to make room, in declaration order
    pub reductions: Vec<Reduction>,

    /// Part of the request dropped because rounded reductions fell short
    pub clamped_by: Amount,
}

impl Adjustment {
    /// Whether any other category was shrunk
    pub fn redistributed(&self) -> bool {
        !self.reductions.is_empty()
    }

    /// Whether nothing changed
    pub fn is_noop(&self) -> bool {
        self.previous == self.applied && self.reductions.is_empty()
    }
}

/// The allocation engine
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    categories: CategorySet,
    total_budget: Amount,
    default_total: Amount,
    state: AllocationState,
}

impl AllocationEngine {
    /// Create an engine over a fixed category set
    ///
    /// `default_total` is the starting total and the value `reset` restores.
    pub fn new(categories: CategorySet, default_total: Amount) -> Self {
        let default_total = default_total.max(MIN_TOTAL_BUDGET);
        let state = AllocationState::zeroed(&categories);
        Self {
            categories,
            total_budget: default_total,
            default_total,
            state,
        }
    }

    /// Engine over CPU/GPU/Memory/Other with a total of 100
    pub fn with_defaults() -> Self {
        Self::new(CategorySet::defaults(), DEFAULT_TOTAL_BUDGET)
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn total_budget(&self) -> Amount {
        self.total_budget
    }

    pub fn default_total(&self) -> Amount {
        self.default_total
    }

    pub fn allocations(&self) -> &AllocationState {
        &self.state
    }

    /// Current amount for a category key
    pub fn allocation(&self, key: &str) -> Option<Amount> {
        self.state.get(key)
    }

    /// Sum of all allocations
    pub fn total_used(&self) -> Amount {
        self.state.total()
    }

    /// Budget not yet assigned, never below zero
    pub fn remaining(&self) -> Amount {
        self.total_budget.saturating_sub(self.total_used())
    }

    /// Finalizing needs something allocated and nothing over budget
    pub fn can_finalize(&self) -> bool {
        let used = self.total_used();
        used.is_positive() && used <= self.total_budget
    }

    /// Replace the total budget and zero every allocation
    ///
    /// Totals below 1 are raised to 1.
    pub fn set_total_budget(&mut self, total: Amount) {
        self.total_budget = total.max(MIN_TOTAL_BUDGET);
        self.state.clear();
    }

    /// Coerce raw input and set it as the total budget
    ///
    /// Unparseable or non-positive input becomes 1. Returns the total applied.
    pub fn set_total_budget_raw(&mut self, raw: &str) -> Amount {
        self.set_total_budget(Amount::coerce(raw, MIN_TOTAL_BUDGET));
        self.total_budget
    }

    /// Move one category to `requested`, shrinking the others on overflow
    ///
    /// The request is clamped to `[0, total]`. When the new sum would pass the
    /// total, every other non-zero category gives up
    /// `min(v, round(v / others * excess))`. If the rounded reductions fall
    /// short of the excess, the adjusted category is lowered to what is left
    /// so the sum still fits.
    pub fn adjust_category(&mut self, key: &str, requested: Amount) -> AllotResult<Adjustment> {
        let index = self
            .state
            .position(key)
            .ok_or_else(|| AllotError::category_not_found(key))?;

        let total = self.total_budget;
        let requested = requested.min(total);
        let previous = self.state.amount_at(index);
        // Widened so the projection cannot saturate back down to the total
        let others = (self.state.total() - previous).units() as u128;
        let projected = others + requested.units() as u128;

        let mut reductions = Vec::new();
        let mut applied = requested;
        let mut clamped_by = Amount::zero();

        if projected > total.units() as u128 {
            // others <= total and requested <= total, so the excess fits in u64
            let excess = Amount::new(
                u64::try_from(projected - total.units() as u128).unwrap_or(u64::MAX),
            );
            let total_others = self.state.total_excluding(index);

            if !total_others.is_zero() {
                for other in 0..self.state.len() {
                    if other == index {
                        continue;
                    }
                    let before = self.state.amount_at(other);
                    if before.is_zero() {
                        continue;
                    }

                    let reduction = before.proportional_share(total_others, excess).min(before);
                    if reduction.is_zero() {
                        continue;
                    }

                    let after = before - reduction;
                    self.state.set_at(other, after);

                    let category = self
                        .categories
                        .at(other)
                        .map(|c| c.key.clone())
                        .unwrap_or_default();
                    reductions.push(Reduction {
                        category,
                        before,
                        after,
                    });
                }
            }

            let ceiling = total - self.state.total_excluding(index);
            if applied > ceiling {
                clamped_by = applied - ceiling;
                applied = ceiling;
            }
        }

        self.state.set_at(index, applied);

        Ok(Adjustment {
            category: key.to_string(),
            previous,
            requested,
            applied,
            reductions,
            clamped_by,
        })
    }

    /// Zero every allocation and restore the default total
    pub fn reset(&mut self) {
        self.total_budget = self.default_total;
        self.state.clear();
    }
}

impl Default for AllocationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const KEYS: [&str; 4] = ["cpu", "gpu", "memory", "other"];

    fn assert_within_budget(engine: &AllocationEngine) -> Result<(), TestCaseError> {
        let total = engine.total_budget();
        prop_assert!(engine.total_used() <= total);
        for allocation in engine.allocations() {
            prop_assert!(allocation.amount <= total);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn adjustments_stay_within_budget(
            total in 1u64..=10_000,
            steps in prop::collection::vec((0usize..4, 0u64..=12_000), 1..64),
        ) {
            let mut engine = AllocationEngine::with_defaults();
            engine.set_total_budget(Amount::new(total));

            for (index, units) in steps {
                engine.adjust_category(KEYS[index], Amount::new(units)).unwrap();
                assert_within_budget(&engine)?;

                for key in KEYS {
                    let before = engine.allocations().clone();
                    let current = engine.allocation(key).unwrap();
                    let adjustment = engine.adjust_category(key, current).unwrap();
                    prop_assert!(adjustment.is_noop());
                    prop_assert_eq!(engine.allocations(), &before);
                }
            }
        }

        #[test]
        fn extreme_amounts_stay_within_budget(
            total in any::<u64>(),
            steps in prop::collection::vec((0usize..4, any::<u64>()), 1..32),
        ) {
            let mut engine = AllocationEngine::with_defaults();
            engine.set_total_budget(Amount::new(total));

            for (index, units) in steps {
                engine.adjust_category(KEYS[index], Amount::new(units)).unwrap();
                assert_within_budget(&engine)?;
            }
        }
    }
}
