//! Relative ranges.
//!
//! The normalization functions never look inside these; they are carried
//! so values round-trip through the same types as absolute ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DrpError;

/// Unit a relative range is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = DrpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "second" => Ok(TimeUnit::Second),
            "minute" => Ok(TimeUnit::Minute),
            "hour" => Ok(TimeUnit::Hour),
            "day" => Ok(TimeUnit::Day),
            "week" => Ok(TimeUnit::Week),
            "month" => Ok(TimeUnit::Month),
            "year" => Ok(TimeUnit::Year),
            _ => Err(DrpError::UnknownTimeUnit(s.to_string())),
        }
    }
}

/// A selected relative range, e.g. "last 7 days".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeValue {
    /// Key of the predefined option this was picked from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub amount: i64,
    pub unit: TimeUnit,
}

impl RelativeValue {
    pub fn new(amount: i64, unit: TimeUnit) -> Self {
        Self {
            key: None,
            amount,
            unit,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// A predefined relative range offered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeOption {
    pub key: String,
    pub amount: i64,
    pub unit: TimeUnit,
}

impl RelativeOption {
    pub fn new(key: impl Into<String>, amount: i64, unit: TimeUnit) -> Self {
        Self {
            key: key.into(),
            amount,
            unit,
        }
    }
}

impl From<&RelativeOption> for RelativeValue {
    fn from(option: &RelativeOption) -> Self {
        RelativeValue::new(option.amount, option.unit).with_key(option.key.clone())
    }
}
