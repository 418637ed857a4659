//! Time zone offset handling for absolute boundaries.
//!
//! Offsets are minutes east of UTC. A boundary may carry its own designator
//! (`Z` or `±HH:MM`); a boundary without one is wall-clock time at the
//! offset the host supplies.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use drp_model::{AbsoluteRange, AbsoluteValue, TimeOffset, Value};

use crate::datetime::{
    DATE_TIME_SEPARATOR, NUMERIC_DESIGNATOR_LEN, UTC_DESIGNATOR, date_part, has_time,
    is_iso_date_only, split_designator,
};

/// Where the host gets its offsets from.
pub enum OffsetSource<'a> {
    /// No offset configured.
    Unset,
    /// The same offset for every date.
    Fixed(i32),
    /// Offset looked up per calendar date (e.g. to follow daylight saving).
    PerDate(&'a dyn Fn(NaiveDate) -> i32),
}

/// Format an offset as an ISO 8601 designator: `Z` for zero, else `±HH:MM`.
pub fn format_offset(minutes: i32) -> String {
    if minutes == 0 {
        return UTC_DESIGNATOR.to_string();
    }
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.unsigned_abs();
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse a `Z` or `±HH:MM` designator into minutes east of UTC.
pub fn parse_offset(designator: &str) -> Option<i32> {
    if designator == "Z" {
        return Some(0);
    }
    let bytes = designator.as_bytes();
    if !designator.is_ascii() || bytes.len() != NUMERIC_DESIGNATOR_LEN || bytes[3] != b':' {
        return None;
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours = parse_two_digits(&designator[1..3])?;
    let minutes = parse_two_digits(&designator[4..6])?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 60 + minutes))
}

fn parse_two_digits(value: &str) -> Option<i32> {
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    }
}

/// Returns whether the boundary ends with a time zone designator.
pub fn has_offset_designator(boundary: &str) -> bool {
    boundary
        .split_once(DATE_TIME_SEPARATOR)
        .is_some_and(|(_, time)| split_designator(time).1.is_some())
}

/// Parse `YYYY-MM-DDTHH:MM[:SS][.fff][Z|±HH:MM]`.
///
/// Returns the local date-time and the designator offset, if any.
fn parse_boundary(boundary: &str) -> Option<(NaiveDateTime, Option<i32>)> {
    let (date, time) = boundary.split_once(DATE_TIME_SEPARATOR)?;
    if !is_iso_date_only(date) {
        return None;
    }
    let (local, designator) = split_designator(time);
    let offset = match designator {
        Some(designator) => Some(parse_offset(designator)?),
        None => None,
    };
    let time = match local.len() {
        5 => NaiveTime::parse_from_str(local, "%H:%M").ok()?,
        8 | 12 => NaiveTime::parse_from_str(local, "%H:%M:%S%.f").ok()?,
        _ => return None,
    };
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    Some((NaiveDateTime::new(date, time), offset))
}

/// Re-express a boundary as wall-clock time at `target` minutes east of UTC.
fn shift_boundary(boundary: &str, target: i32) -> Option<String> {
    let (local, source) = parse_boundary(boundary)?;
    let source = source.unwrap_or(target);
    let delta = Duration::try_minutes(i64::from(target) - i64::from(source))?;
    let shifted = local.checked_add_signed(delta)?;
    Some(shifted.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn append_offset(boundary: &str, minutes: i32) -> String {
    if !has_time(boundary) || has_offset_designator(boundary) {
        return boundary.to_string();
    }
    format!("{boundary}{}", format_offset(minutes))
}

/// Attach the host's offset to boundaries that have a time but no designator.
///
/// Values that are not absolute ranges, and any value when the offset is
/// unknown, are returned unchanged.
pub fn set_time_offset(value: Option<Value>, offset: TimeOffset) -> Option<Value> {
    let TimeOffset::Known {
        start_date,
        end_date,
    } = offset
    else {
        return value;
    };
    match value {
        Some(Value::Absolute(AbsoluteValue::Range(range))) => {
            Some(Value::Absolute(AbsoluteValue::Range(AbsoluteRange {
                start_date: append_offset(&range.start_date, start_date),
                end_date: append_offset(&range.end_date, end_date),
            })))
        }
        other => other,
    }
}

/// Convert boundaries to local wall-clock time at the host's offset.
///
/// Boundaries with a designator are moved from their own offset to the
/// target and lose the designator. Boundaries without one are already
/// local; they are only rewritten to `HH:MM:SS` precision. Values that are
/// not absolute ranges, and any value when the offset is unknown, are
/// returned unchanged.
///
/// Returns `None` when either boundary is not an ISO 8601 date-time, or the
/// shifted time is out of range, so the picker falls back to an empty value.
pub fn shift_time_offset(value: Option<Value>, offset: TimeOffset) -> Option<Value> {
    let range = match value {
        Some(Value::Absolute(AbsoluteValue::Range(range))) => range,
        other => return other,
    };
    let TimeOffset::Known {
        start_date,
        end_date,
    } = offset
    else {
        return Some(Value::Absolute(AbsoluteValue::Range(range)));
    };

    match (
        shift_boundary(&range.start_date, start_date),
        shift_boundary(&range.end_date, end_date),
    ) {
        (Some(start), Some(end)) => Some(Value::absolute(start, end)),
        _ => {
            tracing::warn!(
                start_date = %range.start_date,
                end_date = %range.end_date,
                "Misformatted start or end date; falling back to an empty value. \
                 Dates must be ISO 8601 date-times with an optional time zone offset"
            );
            None
        }
    }
}

/// Resolve the per-boundary offset for a value.
///
/// Only absolute ranges get an offset; everything else, and any value when
/// no source is configured, gets [`TimeOffset::Unknown`].
pub fn normalize_time_offset(value: Option<&Value>, source: &OffsetSource<'_>) -> TimeOffset {
    let Some(Value::Absolute(AbsoluteValue::Range(range))) = value else {
        return TimeOffset::Unknown;
    };
    match source {
        OffsetSource::Unset => TimeOffset::Unknown,
        OffsetSource::Fixed(minutes) => TimeOffset::uniform(*minutes),
        OffsetSource::PerDate(lookup) => {
            let parse = |boundary: &str| NaiveDate::parse_from_str(date_part(boundary), "%Y-%m-%d");
            match (parse(&range.start_date), parse(&range.end_date)) {
                (Ok(start), Ok(end)) => TimeOffset::Known {
                    start_date: lookup(start),
                    end_date: lookup(end),
                },
                _ => {
                    tracing::warn!(
                        start_date = %range.start_date,
                        end_date = %range.end_date,
                        "Cannot look up time offset for unparseable boundary dates"
                    );
                    TimeOffset::Unknown
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_offsets() {
        assert_eq!(format_offset(0), "Z");
        assert_eq!(format_offset(120), "+02:00");
        assert_eq!(format_offset(-330), "-05:30");
        assert_eq!(format_offset(-45), "-00:45");
    }

    #[test]
    fn parses_offsets() {
        assert_eq!(parse_offset("Z"), Some(0));
        assert_eq!(parse_offset("+02:00"), Some(120));
        assert_eq!(parse_offset("-05:30"), Some(-330));
        assert_eq!(parse_offset("+0200"), None);
        assert_eq!(parse_offset("+24:00"), None);
        assert_eq!(parse_offset("02:00"), None);
    }

    #[test]
    fn detects_designators() {
        assert!(has_offset_designator("2024-01-01T10:00:00Z"));
        assert!(has_offset_designator("2024-01-01T10:00:00-08:00"));
        assert!(!has_offset_designator("2024-01-01T10:00:00"));
        assert!(!has_offset_designator("2024-01-01"));
    }

    #[test]
    fn parse_boundary_precisions() {
        let (dt, offset) = parse_boundary("2024-03-10T08:15").expect("minutes");
        assert_eq!(dt.format("%H:%M:%S").to_string(), "08:15:00");
        assert_eq!(offset, None);

        let (_, offset) = parse_boundary("2024-03-10T08:15:30.500+01:00").expect("fraction");
        assert_eq!(offset, Some(60));

        assert!(parse_boundary("2024-03-10").is_none());
        assert!(parse_boundary("2024-03-10T8:15").is_none());
        assert!(parse_boundary("2024-02-30T08:15:00").is_none());
    }

    #[test]
    fn shift_boundary_moves_between_offsets() {
        assert_eq!(
            shift_boundary("2024-01-01T10:00:00Z", 120).as_deref(),
            Some("2024-01-01T12:00:00")
        );
        assert_eq!(
            shift_boundary("2024-01-01T01:00:00+02:00", 0).as_deref(),
            Some("2023-12-31T23:00:00")
        );
        assert_eq!(
            shift_boundary("2024-01-01T10:00", -300).as_deref(),
            Some("2024-01-01T10:00:00")
        );
    }

    #[test]
    fn shift_boundary_handles_extreme_offsets() {
        assert!(shift_boundary("2024-01-01T10:00:00-01:00", i32::MAX).is_some());
        assert!(shift_boundary("2024-01-01T10:00:00+14:00", i32::MIN).is_some());
        assert_eq!(
            shift_boundary("2024-01-01T10:00:00", i32::MAX).as_deref(),
            Some("2024-01-01T10:00:00")
        );
    }
}
