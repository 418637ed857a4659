//! Formatting of values for display and on first load.
//!
//! Both formatters are a decision step followed by one transformation.
//! The decision is exposed ([`format_action`], [`initial_action`]) so the
//! policy can be inspected and tested separately from the string work.

use drp_model::{AbsoluteValue, FormatOptions, TimeOffset, Value};

use crate::datetime::{date_part, is_iso_date_only};
use crate::time_offset::{set_time_offset, shift_time_offset};

/// What [`format_value`] does with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatAction {
    /// Nothing selected, relative, or cleared.
    Keep,
    /// Date-only mode: drop the time of day.
    TruncateToDate,
    /// Attach the configured offset.
    ApplyOffset,
}

/// What [`format_initial_value`] does with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialAction {
    /// Cleared, or already bare dates outside date-only mode.
    Keep,
    /// Date-only mode: format as [`format_value`] would.
    FormatDateOnly,
    /// Shift to the configured offset (a no-op for non-absolute values).
    ShiftOffset,
}

/// Decide how [`format_value`] treats a value. Date-only wins over the
/// offset.
pub fn format_action(value: Option<&Value>, options: &FormatOptions) -> FormatAction {
    match value {
        None | Some(Value::Relative(_)) | Some(Value::Absolute(AbsoluteValue::Cleared)) => {
            FormatAction::Keep
        }
        Some(Value::Absolute(AbsoluteValue::Range(_))) if options.date_only => {
            FormatAction::TruncateToDate
        }
        Some(Value::Absolute(AbsoluteValue::Range(_))) => FormatAction::ApplyOffset,
    }
}

/// Decide how [`format_initial_value`] treats a value.
pub fn initial_action(value: Option<&Value>, date_only: bool) -> InitialAction {
    let range = match value {
        None | Some(Value::Relative(_)) => return InitialAction::ShiftOffset,
        Some(Value::Absolute(AbsoluteValue::Cleared)) => return InitialAction::Keep,
        Some(Value::Absolute(AbsoluteValue::Range(range))) => range,
    };
    if date_only {
        InitialAction::FormatDateOnly
    } else if is_iso_date_only(&range.start_date) && is_iso_date_only(&range.end_date) {
        InitialAction::Keep
    } else {
        InitialAction::ShiftOffset
    }
}

/// Value to display or emit for the current configuration.
///
/// - nothing selected, relative and cleared values pass through
/// - in date-only mode both boundaries are cut at the time separator
/// - otherwise the configured offset is attached via [`set_time_offset`]
pub fn format_value(value: Option<Value>, options: &FormatOptions) -> Option<Value> {
    let action = format_action(value.as_ref(), options);
    tracing::debug!(?action, "formatting value");
    match (action, value) {
        (FormatAction::TruncateToDate, Some(Value::Absolute(AbsoluteValue::Range(range)))) => {
            let truncated = range.map_boundaries(|boundary| date_part(boundary).to_string());
            Some(Value::Absolute(truncated.into()))
        }
        (FormatAction::ApplyOffset, value) => set_time_offset(value, options.time_offset),
        (_, value) => value,
    }
}

/// Normalize a value the picker is initialized with.
///
/// Absolute values already stored as bare dates are left alone outside
/// date-only mode, since shifting needs a time of day. Returns `None` when
/// the offset shift rejects a malformed boundary.
pub fn format_initial_value(
    value: Option<Value>,
    date_only: bool,
    time_offset: TimeOffset,
) -> Option<Value> {
    let action = initial_action(value.as_ref(), date_only);
    tracing::debug!(?action, date_only, "normalizing initial value");
    match action {
        InitialAction::Keep => value,
        InitialAction::FormatDateOnly => format_value(
            value,
            &FormatOptions {
                time_offset,
                date_only,
            },
        ),
        InitialAction::ShiftOffset => shift_time_offset(value, time_offset),
    }
}
