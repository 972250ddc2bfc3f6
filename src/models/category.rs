//! Category and CategorySet models
//!
//! A category is one resource bucket that receives a share of the budget.
//! The set of categories is fixed and ordered once an engine is built from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a category label
pub const MAX_LABEL_LEN: usize = 30;

/// A resource category (e.g., "cpu" labelled "CPU")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Stable lowercase key used by input events
    pub key: String,

    /// Human-readable label
    pub label: String,
}

impl Category {
    /// Create a new category
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.key.is_empty() {
            return Err(CategoryValidationError::EmptyKey);
        }

        let valid_key = self
            .key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !valid_key {
            return Err(CategoryValidationError::InvalidKey(self.key.clone()));
        }

        if self.label.trim().is_empty() {
            return Err(CategoryValidationError::EmptyLabel);
        }

        if self.label.chars().count() > MAX_LABEL_LEN {
            return Err(CategoryValidationError::LabelTooLong(
                self.label.chars().count(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The built-in resource categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Cpu,
    Gpu,
    Memory,
    Other,
}

impl DefaultCategory {
    /// Get all default categories in display order
    pub fn all() -> &'static [Self] {
        &[Self::Cpu, Self::Gpu, Self::Memory, Self::Other]
    }

    /// Get the key for this default category
    pub fn key(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Memory => "memory",
            Self::Other => "other",
        }
    }

    /// Get the label for this default category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Memory => "Memory",
            Self::Other => "Other",
        }
    }

    /// Create a Category from this default
    pub fn to_category(&self) -> Category {
        Category::new(self.key(), self.label())
    }
}

/// An ordered, validated, immutable set of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Build a set, validating every category and rejecting duplicate keys
    pub fn new(categories: Vec<Category>) -> Result<Self, CategoryValidationError> {
        if categories.is_empty() {
            return Err(CategoryValidationError::EmptySet);
        }

        for (i, category) in categories.iter().enumerate() {
            category.validate()?;
            if categories[..i].iter().any(|c| c.key == category.key) {
                return Err(CategoryValidationError::DuplicateKey(category.key.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// The built-in set: CPU, GPU, Memory, Other
    pub fn defaults() -> Self {
        Self {
            categories: DefaultCategory::all()
                .iter()
                .map(DefaultCategory::to_category)
                .collect(),
        }
    }

    /// Look up a category by key
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Position of a category in declaration order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.key == key)
    }

    /// Category at a position
    pub fn at(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Iterate in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    /// All keys in declaration order
    pub fn keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyKey,
    InvalidKey(String),
    EmptyLabel,
    LabelTooLong(usize),
    DuplicateKey(String),
    EmptySet,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "Category key cannot be empty"),
            Self::InvalidKey(key) => write!(
                f,
                "Invalid category key '{}' (use lowercase letters, digits, '-' or '_')",
                key
            ),
            Self::EmptyLabel => write!(f, "Category label cannot be empty"),
            Self::LabelTooLong(len) => write!(
                f,
                "Category label too long ({} chars, max {})",
                len, MAX_LABEL_LEN
            ),
            Self::DuplicateKey(key) => write!(f, "Duplicate category key '{}'", key),
            Self::EmptySet => write!(f, "At least one category is required"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let set = CategorySet::defaults();
        assert_eq!(set.keys(), vec!["cpu", "gpu", "memory", "other"]);
        assert_eq!(set.get("memory").unwrap().label, "Memory");
        assert_eq!(set.position("other"), Some(3));
        assert!(set.get("disk").is_none());
    }

    #[test]
    fn test_category_validation() {
        assert!(Category::new("cpu", "CPU").validate().is_ok());
        assert_eq!(
            Category::new("", "CPU").validate(),
            Err(CategoryValidationError::EmptyKey)
        );
        assert!(matches!(
            Category::new("Cpu", "CPU").validate(),
            Err(CategoryValidationError::InvalidKey(_))
        ));
        assert_eq!(
            Category::new("cpu", "  ").validate(),
            Err(CategoryValidationError::EmptyLabel)
        );
        assert!(matches!(
            Category::new("cpu", "x".repeat(31)).validate(),
            Err(CategoryValidationError::LabelTooLong(31))
        ));
    }

    #[test]
    fn test_set_rejects_duplicates() {
        let result = CategorySet::new(vec![
            Category::new("cpu", "CPU"),
            Category::new("cpu", "Processor"),
        ]);
        assert_eq!(
            result,
            Err(CategoryValidationError::DuplicateKey("cpu".into()))
        );
    }

    #[test]
    fn test_set_rejects_empty() {
        assert_eq!(
            CategorySet::new(Vec::new()),
            Err(CategoryValidationError::EmptySet)
        );
    }

    #[test]
    fn test_custom_set_keeps_order() {
        let set = CategorySet::new(vec![
            Category::new("storage", "Storage"),
            Category::new("network", "Network"),
        ])
        .unwrap();
        let labels: Vec<_> = set.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Storage", "Network"]);
    }

    #[test]
    fn test_serialization() {
        let category = DefaultCategory::Gpu.to_category();
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }
}
