//! Picker mode resolution.

use drp_model::{PickerMode, RangeSelectorMode, RelativeOption, Value};

/// Decide whether the picker opens in absolute or relative mode.
///
/// An existing value always decides by its own kind, even against the
/// configured selector mode. Without a value the selector mode decides, and
/// in the default mode relative wins when any relative option is offered.
pub fn resolve_mode(
    value: Option<&Value>,
    relative_options: &[RelativeOption],
    range_selector_mode: RangeSelectorMode,
) -> PickerMode {
    if let Some(value) = value {
        return value.mode();
    }
    match range_selector_mode {
        RangeSelectorMode::RelativeOnly => PickerMode::Relative,
        RangeSelectorMode::AbsoluteOnly => PickerMode::Absolute,
        RangeSelectorMode::Default if relative_options.is_empty() => PickerMode::Absolute,
        RangeSelectorMode::Default => PickerMode::Relative,
    }
}
