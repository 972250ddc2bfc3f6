//! Allocation display formatting
//!
//! Tables for the scripted session output and the category listing.

use crate::models::{AllocationState, Allotment, Amount, CategorySet};
use crate::services::RemainingStatus;

use super::report::{format_bar, format_percentage, percentage_of, separator, truncate};

const BAR_WIDTH: usize = 20;
const MAX_LABEL_WIDTH: usize = 20;

/// Format the allocation table with a bar per category and the remaining status
pub fn format_allocation_table(
    state: &AllocationState,
    total_budget: Amount,
    currency_label: &str,
) -> String {
    let label_width = label_width(state.iter().map(|a| a.category.label.as_str()));
    let total = total_budget.units();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>8}  {:>6}  {}\n",
        "Category",
        "Amount",
        "Share",
        "Allocation",
        width = label_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->8}  {:->6}  {:-<bar$}\n",
        "",
        "",
        "",
        "",
        width = label_width,
        bar = BAR_WIDTH
    ));

    for allocation in state {
        let units = allocation.amount.units();
        output.push_str(&format!(
            "{:<width$}  {:>8}  {:>6}  {}\n",
            truncate(&allocation.category.label, MAX_LABEL_WIDTH),
            units,
            format_percentage(percentage_of(units, total)),
            format_bar(units as f64, total as f64, BAR_WIDTH),
            width = label_width
        ));
    }

    let used = state.total();
    output.push_str(&separator(label_width + BAR_WIDTH + 20));
    output.push('\n');
    output.push_str(&format!(
        "Used: {} of {}\n",
        used,
        total_budget.format_with_label(currency_label)
    ));
    let status = RemainingStatus::from_remaining(total_budget.saturating_sub(used));
    output.push_str(&status.describe(currency_label));
    output.push('\n');

    output
}

/// Format the summary printed after a successful allotment
pub fn format_allotment(allotment: &Allotment, currency_label: &str) -> String {
    let label_width = label_width(
        allotment
            .allocations
            .iter()
            .map(|a| a.category.label.as_str()),
    );

    let mut output = String::new();
    output.push_str(&format!(
        "Allotted {} of {}\n",
        allotment.used,
        allotment.total_budget.format_with_label(currency_label)
    ));
    for allocation in &allotment.allocations {
        output.push_str(&format!(
            "  {:<width$}  {:>8}\n",
            truncate(&allocation.category.label, MAX_LABEL_WIDTH),
            allocation.amount.units(),
            width = label_width
        ));
    }
    output.push_str(&format!(
        "  Unallotted: {}\n",
        allotment.remaining.format_with_label(currency_label)
    ));

    output
}

/// Format the configured categories
pub fn format_category_list(categories: &CategorySet) -> String {
    if categories.is_empty() {
        return "No categories configured.".to_string();
    }

    let key_width = categories
        .iter()
        .map(|c| c.key.len())
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  {}\n", "Key", "Label", width = key_width));
    output.push_str(&format!("{:-<width$}  {:-<12}\n", "", "", width = key_width));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            category.key,
            category.label,
            width = key_width
        ));
    }

    output
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels
        .map(|l| l.chars().count().min(MAX_LABEL_WIDTH))
        .max()
        .unwrap_or(8)
        .max(8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AllocationEngine;

    #[test]
    fn test_allocation_table() {
        let mut engine = AllocationEngine::with_defaults();
        engine.adjust_category("cpu", Amount::new(30)).unwrap();

        let table = format_allocation_table(engine.allocations(), engine.total_budget(), "USD");
        assert!(table.contains("CPU"));
        assert!(table.contains("30%"));
        assert!(table.contains("Used: 30 of 100 USD"));
        assert!(table.ends_with("Remaining: 70 USD\n"));
    }

    #[test]
    fn test_allocation_table_fully_allotted() {
        let mut engine = AllocationEngine::with_defaults();
        engine.adjust_category("gpu", Amount::new(100)).unwrap();

        let table = format_allocation_table(engine.allocations(), engine.total_budget(), "USD");
        assert!(table.contains("All budget allotted"));
    }

    #[test]
    fn test_allotment_summary() {
        let mut engine = AllocationEngine::with_defaults();
        engine.adjust_category("memory", Amount::new(40)).unwrap();
        let allotment = Allotment::capture(engine.total_budget(), engine.allocations());

        let summary = format_allotment(&allotment, "EUR");
        assert!(summary.starts_with("Allotted 40 of 100 EUR"));
        assert!(summary.contains("Unallotted: 60 EUR"));
    }

    #[test]
    fn test_category_list() {
        let list = format_category_list(&CategorySet::defaults());
        assert!(list.contains("memory"));
        assert!(list.contains("Other"));
    }
}
