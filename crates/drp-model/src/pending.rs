//! Editable decomposition of an absolute range.

use serde::{Deserialize, Serialize};

/// Date and time halves of one boundary, as typed into the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeParts {
    pub date: String,
    pub time: String,
}

impl DateTimeParts {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }
}

/// Absolute range while it is being edited. Any part may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAbsoluteValue {
    pub start: DateTimeParts,
    pub end: DateTimeParts,
}

impl PendingAbsoluteValue {
    pub fn new(start: DateTimeParts, end: DateTimeParts) -> Self {
        Self { start, end }
    }

    /// All four inputs empty.
    pub fn empty() -> Self {
        Self::default()
    }
}
