//! Per-boundary time zone offsets.

use serde::{Deserialize, Serialize};

use crate::error::{DrpError, Result};

/// Offset, in minutes east of UTC, to apply to each boundary.
///
/// Either both boundaries have a known offset or neither has; the host
/// never supplies one without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "TimeOffsetWire", into = "TimeOffsetWire")]
pub enum TimeOffset {
    /// No offset information; offset primitives leave values alone.
    #[default]
    Unknown,
    Known { start_date: i32, end_date: i32 },
}

impl TimeOffset {
    /// Same offset for both boundaries.
    pub fn uniform(minutes: i32) -> Self {
        TimeOffset::Known {
            start_date: minutes,
            end_date: minutes,
        }
    }

    /// Build from optional parts, rejecting a half-specified offset.
    pub fn from_parts(start: Option<i32>, end: Option<i32>) -> Result<Self> {
        match (start, end) {
            (Some(start_date), Some(end_date)) => Ok(TimeOffset::Known {
                start_date,
                end_date,
            }),
            (None, None) => Ok(TimeOffset::Unknown),
            (start, end) => Err(DrpError::PartialTimeOffset { start, end }),
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, TimeOffset::Known { .. })
    }

    pub fn start_date(&self) -> Option<i32> {
        match self {
            TimeOffset::Known { start_date, .. } => Some(*start_date),
            TimeOffset::Unknown => None,
        }
    }

    pub fn end_date(&self) -> Option<i32> {
        match self {
            TimeOffset::Known { end_date, .. } => Some(*end_date),
            TimeOffset::Unknown => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeOffsetWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_date: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<i32>,
}

impl TryFrom<TimeOffsetWire> for TimeOffset {
    type Error = DrpError;

    fn try_from(wire: TimeOffsetWire) -> Result<Self> {
        TimeOffset::from_parts(wire.start_date, wire.end_date)
    }
}

impl From<TimeOffset> for TimeOffsetWire {
    fn from(offset: TimeOffset) -> Self {
        TimeOffsetWire {
            start_date: offset.start_date(),
            end_date: offset.end_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_couples_fields() {
        assert_eq!(TimeOffset::from_parts(None, None), Ok(TimeOffset::Unknown));
        assert_eq!(
            TimeOffset::from_parts(Some(60), Some(120)),
            Ok(TimeOffset::Known {
                start_date: 60,
                end_date: 120
            })
        );
        assert_eq!(
            TimeOffset::from_parts(Some(60), None),
            Err(DrpError::PartialTimeOffset {
                start: Some(60),
                end: None
            })
        );
    }

    #[test]
    fn accessors() {
        let offset = TimeOffset::uniform(-300);
        assert!(offset.is_known());
        assert_eq!(offset.start_date(), Some(-300));
        assert_eq!(offset.end_date(), Some(-300));
        assert_eq!(TimeOffset::Unknown.start_date(), None);
    }
}
