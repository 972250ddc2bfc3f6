//! Activity entry data structures
//!
//! One entry per session operation: what happened, to which subject, and the
//! state before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;

/// Operations recorded in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Total budget replaced
    SetTotal,
    /// One category moved (possibly redistributing the others)
    Adjust,
    /// Cancel confirmed, everything zeroed
    Reset,
    /// Budget finalized
    Allot,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::SetTotal => write!(f, "SET_TOTAL"),
            Operation::Adjust => write!(f, "ADJUST"),
            Operation::Reset => write!(f, "RESET"),
            Operation::Allot => write!(f, "ALLOT"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// What the operation applied to: a category key, "total" or "session"
    pub subject: String,

    /// Snapshot before the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,

    /// Free-form note (e.g., which categories were shrunk)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ActivityEntry {
    /// Record an operation with before/after snapshots
    ///
    /// The diff summary is derived from the snapshots.
    pub fn record<T: Serialize>(
        operation: Operation,
        subject: impl Into<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation,
            subject: subject.into(),
            before,
            after,
            diff_summary,
            note: None,
        }
    }

    /// Record an operation that only has a resulting value
    pub fn outcome<T: Serialize>(
        operation: Operation,
        subject: impl Into<String>,
        after: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            subject: subject.into(),
            before: None,
            after: serde_json::to_value(after).ok(),
            diff_summary: None,
            note: None,
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.subject
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        if let Some(note) = &self.note {
            output.push_str(&format!("\n  Note: {}", note));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::SetTotal.to_string(), "SET_TOTAL");
        assert_eq!(Operation::Adjust.to_string(), "ADJUST");
        assert_eq!(Operation::Reset.to_string(), "RESET");
        assert_eq!(Operation::Allot.to_string(), "ALLOT");
    }

    #[test]
    fn test_record_builds_diff() {
        let entry = ActivityEntry::record(
            Operation::Adjust,
            "gpu",
            &json!({"cpu": 60, "gpu": 0}),
            &json!({"cpu": 50, "gpu": 50}),
        );

        assert_eq!(entry.operation, Operation::Adjust);
        assert_eq!(entry.subject, "gpu");
        let diff = entry.diff_summary.unwrap();
        assert!(diff.contains("cpu: 60 -> 50"));
        assert!(diff.contains("gpu: 0 -> 50"));
    }

    #[test]
    fn test_outcome_has_no_before() {
        let entry = ActivityEntry::outcome(Operation::Allot, "session", &json!({"used": 99}));
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
        assert!(entry.diff_summary.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = ActivityEntry::record(Operation::SetTotal, "total", &100, &250)
            .with_note("typed");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"set_total\""));

        let deserialized: ActivityEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::SetTotal);
        assert_eq!(deserialized.note.as_deref(), Some("typed"));
        assert_eq!(deserialized.diff_summary.as_deref(), Some("100 -> 250"));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = ActivityEntry::record(
            Operation::Reset,
            "session",
            &json!({"cpu": 5}),
            &json!({"cpu": 0}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("RESET"));
        assert!(formatted.contains("session"));
        assert!(formatted.contains("cpu: 5 -> 0"));
    }
}
