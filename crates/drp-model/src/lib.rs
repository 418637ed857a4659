//! Value and configuration types for the date range picker.
//!
//! A range is either absolute (two ISO 8601 boundaries) or relative
//! (an amount of some time unit counted back from now). The serde
//! representation matches the JSON the host component exchanges:
//!
//! ```json
//! {"type":"absolute","startDate":"2024-01-01T00:00:00","endDate":"2024-01-02T23:59:59"}
//! {"type":"relative","key":"previous-7-days","amount":7,"unit":"day"}
//! ```

pub mod error;
pub mod mode;
pub mod offset;
pub mod options;
pub mod pending;
pub mod relative;
pub mod value;

pub use error::{DrpError, Result};
pub use mode::{PickerMode, RangeSelectorMode};
pub use offset::TimeOffset;
pub use options::{FormatOptions, PickerConfig};
pub use pending::{DateTimeParts, PendingAbsoluteValue};
pub use relative::{RelativeOption, RelativeValue, TimeUnit};
pub use value::{AbsoluteRange, AbsoluteValue, Value};
