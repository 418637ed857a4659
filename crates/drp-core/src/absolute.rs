//! Conversion between absolute values and the pending inputs being edited.

use drp_model::{AbsoluteValue, DateTimeParts, PendingAbsoluteValue};

use crate::datetime::{join_date_time, normalize_time_string, split_date_time};

/// Time used for a start boundary entered without one (start of day).
pub const DEFAULT_START_TIME: &str = "00:00:00";

/// Time used for an end boundary entered without one (end of day).
pub const DEFAULT_END_TIME: &str = "23:59:59";

/// Split an absolute value into date and time inputs per boundary.
///
/// Nothing selected and a cleared value both give four empty inputs.
pub fn split_absolute_value(value: Option<&AbsoluteValue>) -> PendingAbsoluteValue {
    match value.and_then(AbsoluteValue::range) {
        None => PendingAbsoluteValue::empty(),
        Some(range) => PendingAbsoluteValue::new(
            split_date_time(&range.start_date),
            split_date_time(&range.end_date),
        ),
    }
}

/// Combine pending inputs into an absolute value.
///
/// Missing times default so the range covers whole days: the start at
/// [`DEFAULT_START_TIME`], the end at [`DEFAULT_END_TIME`]. A boundary with
/// no date stays empty; two empty dates give [`AbsoluteValue::Cleared`].
pub fn join_absolute_value(pending: &PendingAbsoluteValue) -> AbsoluteValue {
    AbsoluteValue::from_boundaries(
        join_boundary(&pending.start, DEFAULT_START_TIME),
        join_boundary(&pending.end, DEFAULT_END_TIME),
    )
}

fn join_boundary(parts: &DateTimeParts, default_time: &str) -> String {
    let time = if parts.time.is_empty() {
        default_time
    } else {
        parts.time.as_str()
    };
    join_date_time(&parts.date, &normalize_time_string(time))
}
