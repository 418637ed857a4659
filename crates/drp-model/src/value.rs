//! Range values selected in the picker.

use serde::{Deserialize, Serialize};

use crate::mode::PickerMode;
use crate::relative::RelativeValue;

/// A selected date range.
///
/// "Nothing selected" is modelled by the caller as `Option<Value>::None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Value {
    /// Range bounded by two explicit calendar boundaries.
    Absolute(AbsoluteValue),
    /// Symbolic range such as "last 7 days".
    Relative(RelativeValue),
}

impl Value {
    /// Build an absolute value from two boundary strings.
    pub fn absolute(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self::Absolute(AbsoluteValue::from_boundaries(start_date, end_date))
    }

    /// The picker mode this value belongs to.
    pub fn mode(&self) -> PickerMode {
        match self {
            Value::Absolute(_) => PickerMode::Absolute,
            Value::Relative(_) => PickerMode::Relative,
        }
    }
}

impl From<AbsoluteValue> for Value {
    fn from(value: AbsoluteValue) -> Self {
        Value::Absolute(value)
    }
}

impl From<RelativeValue> for Value {
    fn from(value: RelativeValue) -> Self {
        Value::Relative(value)
    }
}

/// Absolute range value.
///
/// The host component signals a cleared range with two empty boundary
/// strings. That state is its own variant here; it is converted back to
/// empty strings only at the serde boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AbsoluteWire", into = "AbsoluteWire")]
pub enum AbsoluteValue {
    /// Both boundaries unset.
    Cleared,
    /// At least one boundary set.
    Range(AbsoluteRange),
}

/// Boundaries of an absolute range, each an ISO 8601 date or date-time.
///
/// One boundary may be empty when the range was joined from an
/// incomplete pending value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteRange {
    pub start_date: String,
    pub end_date: String,
}

impl AbsoluteRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Apply `f` to both boundaries.
    pub fn map_boundaries(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self {
            start_date: f(&self.start_date),
            end_date: f(&self.end_date),
        }
    }
}

impl AbsoluteValue {
    /// Returns `Cleared` when both boundaries are empty.
    pub fn from_boundaries(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        let start_date = start_date.into();
        let end_date = end_date.into();
        if start_date.is_empty() && end_date.is_empty() {
            AbsoluteValue::Cleared
        } else {
            AbsoluteValue::Range(AbsoluteRange {
                start_date,
                end_date,
            })
        }
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, AbsoluteValue::Cleared)
    }

    pub fn range(&self) -> Option<&AbsoluteRange> {
        match self {
            AbsoluteValue::Cleared => None,
            AbsoluteValue::Range(range) => Some(range),
        }
    }

    /// Start boundary, empty when cleared.
    pub fn start_date(&self) -> &str {
        self.range().map_or("", |range| range.start_date.as_str())
    }

    /// End boundary, empty when cleared.
    pub fn end_date(&self) -> &str {
        self.range().map_or("", |range| range.end_date.as_str())
    }
}

impl From<AbsoluteRange> for AbsoluteValue {
    fn from(range: AbsoluteRange) -> Self {
        AbsoluteValue::from_boundaries(range.start_date, range.end_date)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AbsoluteWire {
    start_date: String,
    end_date: String,
}

impl From<AbsoluteWire> for AbsoluteValue {
    fn from(wire: AbsoluteWire) -> Self {
        AbsoluteValue::from_boundaries(wire.start_date, wire.end_date)
    }
}

impl From<AbsoluteValue> for AbsoluteWire {
    fn from(value: AbsoluteValue) -> Self {
        match value {
            AbsoluteValue::Cleared => AbsoluteWire {
                start_date: String::new(),
                end_date: String::new(),
            },
            AbsoluteValue::Range(range) => AbsoluteWire {
                start_date: range.start_date,
                end_date: range.end_date,
            },
        }
    }
}
