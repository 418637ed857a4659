//! Date range value normalization.
//!
//! Converts between the three shapes a date range takes in the picker:
//!
//! - **pending**: separate date and time strings per boundary, as edited
//! - **absolute**: two combined ISO 8601 boundaries, as stored
//! - **relative**: a symbolic range, passed through untouched
//!
//! and decides when a caller-supplied time zone offset is applied so that a
//! boundary is never shifted twice.
//!
//! # Overview
//!
//! - [`format_value`]: value to display or emit, applying date-only
//!   truncation or the time offset
//! - [`format_initial_value`]: first-load normalization of an incoming value
//! - [`resolve_mode`]: absolute or relative mode for the picker
//! - [`split_absolute_value`] / [`join_absolute_value`]: absolute value to
//!   pending inputs and back, filling default times
//! - [`normalize_time_offset`]: per-boundary offset from a fixed or
//!   per-date source
//!
//! Every function is pure and synchronous.
//!
//! # Example
//!
//! ```
//! use drp_core::{format_value, join_absolute_value};
//! use drp_model::{DateTimeParts, FormatOptions, PendingAbsoluteValue, Value};
//!
//! let pending = PendingAbsoluteValue::new(
//!     DateTimeParts::new("2024-01-01", ""),
//!     DateTimeParts::new("2024-01-02", ""),
//! );
//! let joined = Value::Absolute(join_absolute_value(&pending));
//! assert_eq!(joined, Value::absolute("2024-01-01T00:00:00", "2024-01-02T23:59:59"));
//!
//! let options = FormatOptions::new().with_date_only(true);
//! let formatted = format_value(Some(joined), &options);
//! assert_eq!(formatted, Some(Value::absolute("2024-01-01", "2024-01-02")));
//! ```

pub mod absolute;
pub mod datetime;
pub mod format;
pub mod mode;
pub mod time_offset;

pub use absolute::{DEFAULT_END_TIME, DEFAULT_START_TIME, join_absolute_value, split_absolute_value};
pub use format::{
    FormatAction, InitialAction, format_action, format_initial_value, format_value,
    initial_action,
};
pub use mode::resolve_mode;
pub use time_offset::{OffsetSource, normalize_time_offset, set_time_offset, shift_time_offset};
