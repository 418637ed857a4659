//! String primitives for ISO 8601 date and date-time boundaries.
//!
//! These work on the text of a boundary and never validate it; a malformed
//! string comes back out malformed.

use drp_model::DateTimeParts;

/// Separator between the date and time of an ISO 8601 date-time.
pub const DATE_TIME_SEPARATOR: char = 'T';

pub(crate) const UTC_DESIGNATOR: char = 'Z';

/// Length of a `±HH:MM` designator.
pub(crate) const NUMERIC_DESIGNATOR_LEN: usize = 6;

/// Split a boundary into its date and time halves at the first `T`.
///
/// A boundary without a time yields an empty time; `""` yields two empty
/// halves.
pub fn split_date_time(value: &str) -> DateTimeParts {
    match value.split_once(DATE_TIME_SEPARATOR) {
        Some((date, time)) => DateTimeParts::new(date, time),
        None => DateTimeParts::new(value, ""),
    }
}

/// Combine a date and a time into one boundary.
///
/// An empty date yields an empty boundary whatever the time is; an empty
/// time yields the bare date.
pub fn join_date_time(date: &str, time: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    if time.is_empty() {
        return date.to_string();
    }
    format!("{date}{DATE_TIME_SEPARATOR}{time}")
}

/// Date portion of a boundary (everything before the first `T`).
pub fn date_part(value: &str) -> &str {
    value
        .split_once(DATE_TIME_SEPARATOR)
        .map_or(value, |(date, _)| date)
}

/// Returns whether the boundary carries a time component.
pub fn has_time(value: &str) -> bool {
    value.contains(DATE_TIME_SEPARATOR)
}

/// Split the time half of a boundary into local time and its trailing
/// `Z` or `±HH:MM` designator, if any.
pub fn split_designator(time: &str) -> (&str, Option<&str>) {
    if let Some(local) = time.strip_suffix(UTC_DESIGNATOR) {
        return (local, Some(&time[local.len()..]));
    }
    if time.len() > NUMERIC_DESIGNATOR_LEN {
        let at = time.len() - NUMERIC_DESIGNATOR_LEN;
        if time.is_char_boundary(at) && matches!(time.as_bytes()[at], b'+' | b'-') {
            return (&time[..at], Some(&time[at..]));
        }
    }
    (time, None)
}

/// Fill in missing minute and second components with `00`.
///
/// `"10"` becomes `"10:00:00"` and `"10:30Z"` becomes `"10:30:00Z"`. A time
/// that already has seconds (with or without a fraction) is returned as
/// is; a designator is kept after the local time.
pub fn normalize_time_string(time: &str) -> String {
    let (local, designator) = split_designator(time);
    let mut parts = local.splitn(3, ':');
    let mut next = || parts.next().filter(|part| !part.is_empty()).unwrap_or("00");
    let hours = next();
    let minutes = next();
    let seconds = next();
    format!("{hours}:{minutes}:{seconds}{}", designator.unwrap_or(""))
}

/// Returns whether the value is exactly a `YYYY-MM-DD` date.
pub fn is_iso_date_only(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_full_date_time() {
        assert_eq!(
            split_date_time("2024-01-01T10:30:00"),
            DateTimeParts::new("2024-01-01", "10:30:00")
        );
    }

    #[test]
    fn split_keeps_offset_in_time() {
        assert_eq!(
            split_date_time("2024-01-01T10:30:00+02:00"),
            DateTimeParts::new("2024-01-01", "10:30:00+02:00")
        );
    }

    #[test]
    fn split_date_only_and_empty() {
        assert_eq!(
            split_date_time("2024-01-01"),
            DateTimeParts::new("2024-01-01", "")
        );
        assert_eq!(split_date_time(""), DateTimeParts::default());
    }

    #[test]
    fn join_with_empty_date_is_empty() {
        assert_eq!(join_date_time("", "10:00:00"), "");
        assert_eq!(join_date_time("", ""), "");
    }

    #[test]
    fn join_date_and_time() {
        assert_eq!(join_date_time("2024-01-01", "10:00:00"), "2024-01-01T10:00:00");
        assert_eq!(join_date_time("2024-01-01", ""), "2024-01-01");
    }

    #[test]
    fn date_part_truncates_at_separator() {
        assert_eq!(date_part("2024-01-01T10:00:00"), "2024-01-01");
        assert_eq!(date_part("2024-01-01"), "2024-01-01");
        assert_eq!(date_part(""), "");
    }

    #[test]
    fn normalize_fills_missing_components() {
        assert_eq!(normalize_time_string("10"), "10:00:00");
        assert_eq!(normalize_time_string("10:30"), "10:30:00");
        assert_eq!(normalize_time_string("10:30:15"), "10:30:15");
        assert_eq!(normalize_time_string(""), "00:00:00");
    }

    #[test]
    fn normalize_keeps_fraction_and_offset() {
        assert_eq!(normalize_time_string("10:30:15.250"), "10:30:15.250");
        assert_eq!(normalize_time_string("10:30:15Z"), "10:30:15Z");
        assert_eq!(normalize_time_string("10:30:15-05:00"), "10:30:15-05:00");
    }

    #[test]
    fn normalize_pads_local_part_before_designator() {
        assert_eq!(normalize_time_string("10:30Z"), "10:30:00Z");
        assert_eq!(normalize_time_string("10:30+02:00"), "10:30:00+02:00");
        assert_eq!(normalize_time_string("10-05:00"), "10:00:00-05:00");
    }

    #[test]
    fn split_designator_variants() {
        assert_eq!(split_designator("10:30:00Z"), ("10:30:00", Some("Z")));
        assert_eq!(split_designator("10:30-08:00"), ("10:30", Some("-08:00")));
        assert_eq!(split_designator("10:30:00"), ("10:30:00", None));
    }

    #[test]
    fn iso_date_only() {
        assert!(is_iso_date_only("2024-01-01"));
        assert!(!is_iso_date_only("2024-01-01T00:00:00"));
        assert!(!is_iso_date_only("2024-1-01"));
        assert!(!is_iso_date_only("2024/01/01"));
        assert!(!is_iso_date_only(""));
    }

    #[test]
    fn has_time_component() {
        assert!(has_time("2024-01-01T00:00"));
        assert!(!has_time("2024-01-01"));
    }
}
