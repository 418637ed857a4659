//! Configuration supplied by the host component.

use serde::{Deserialize, Serialize};

use crate::mode::RangeSelectorMode;
use crate::offset::TimeOffset;
use crate::relative::RelativeOption;

/// Display options for formatting a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Offset applied to boundaries without a time zone designator.
    pub time_offset: TimeOffset,
    /// Discard the time of day from both boundaries.
    pub date_only: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time_offset(mut self, time_offset: TimeOffset) -> Self {
        self.time_offset = time_offset;
        self
    }

    #[must_use]
    pub fn with_date_only(mut self, date_only: bool) -> Self {
        self.date_only = date_only;
        self
    }
}

/// Picker configuration as the host declares it.
///
/// Every field is optional in JSON; missing fields take the defaults
/// below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    /// Hide time inputs and store dates only. Default: false.
    pub date_only: bool,

    /// Which selectors are offered. Default: both.
    pub range_selector_mode: RangeSelectorMode,

    /// Predefined relative ranges. Default: none.
    pub relative_options: Vec<RelativeOption>,

    /// Fixed offset in minutes east of UTC used for every boundary.
    /// Default: unknown (no offset correction).
    pub time_offset: Option<i32>,
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_date_only(mut self, date_only: bool) -> Self {
        self.date_only = date_only;
        self
    }

    #[must_use]
    pub fn with_range_selector_mode(mut self, mode: RangeSelectorMode) -> Self {
        self.range_selector_mode = mode;
        self
    }

    #[must_use]
    pub fn with_relative_options(mut self, options: Vec<RelativeOption>) -> Self {
        self.relative_options = options;
        self
    }

    #[must_use]
    pub fn with_time_offset(mut self, minutes: Option<i32>) -> Self {
        self.time_offset = minutes;
        self
    }
}
