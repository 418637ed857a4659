//! Picker modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DrpError;

/// Which kind of range the picker is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    Absolute,
    Relative,
}

impl PickerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickerMode::Absolute => "absolute",
            PickerMode::Relative => "relative",
        }
    }
}

impl fmt::Display for PickerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which range selectors the host offers to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeSelectorMode {
    /// Only relative ranges can be selected.
    RelativeOnly,
    /// Only absolute ranges can be selected.
    AbsoluteOnly,
    /// Both selectors are offered.
    #[default]
    Default,
}

impl RangeSelectorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeSelectorMode::RelativeOnly => "relative-only",
            RangeSelectorMode::AbsoluteOnly => "absolute-only",
            RangeSelectorMode::Default => "default",
        }
    }
}

impl fmt::Display for RangeSelectorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeSelectorMode {
    type Err = DrpError;

    /// Parse a mode name, case-insensitive and tolerant of `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "relative-only" => Ok(RangeSelectorMode::RelativeOnly),
            "absolute-only" => Ok(RangeSelectorMode::AbsoluteOnly),
            "default" => Ok(RangeSelectorMode::Default),
            _ => Err(DrpError::UnknownRangeSelectorMode(s.to_string())),
        }
    }
}
