//! Tests for picker mode resolution.

use drp_core::resolve_mode;
use drp_model::{
    AbsoluteValue, PickerMode, RangeSelectorMode, RelativeOption, RelativeValue, TimeUnit, Value,
};

fn option() -> RelativeOption {
    RelativeOption::new("previous-5-minutes", 5, TimeUnit::Minute)
}

#[test]
fn test_no_value_follows_selector_mode() {
    assert_eq!(
        resolve_mode(None, &[], RangeSelectorMode::RelativeOnly),
        PickerMode::Relative
    );
    assert_eq!(
        resolve_mode(None, &[], RangeSelectorMode::AbsoluteOnly),
        PickerMode::Absolute
    );
    assert_eq!(
        resolve_mode(None, &[option()], RangeSelectorMode::AbsoluteOnly),
        PickerMode::Absolute
    );
}

#[test]
fn test_default_mode_depends_on_relative_options() {
    assert_eq!(
        resolve_mode(None, &[], RangeSelectorMode::Default),
        PickerMode::Absolute
    );
    assert_eq!(
        resolve_mode(None, &[option()], RangeSelectorMode::Default),
        PickerMode::Relative
    );
}

#[test]
fn test_value_kind_overrides_configuration() {
    let absolute = Value::absolute("2024-01-01T00:00:00", "2024-01-02T00:00:00");
    assert_eq!(
        resolve_mode(Some(&absolute), &[option()], RangeSelectorMode::RelativeOnly),
        PickerMode::Absolute
    );

    let relative = Value::Relative(RelativeValue::new(1, TimeUnit::Week));
    assert_eq!(
        resolve_mode(Some(&relative), &[], RangeSelectorMode::AbsoluteOnly),
        PickerMode::Relative
    );
}

#[test]
fn test_cleared_value_is_still_absolute() {
    let cleared = Value::Absolute(AbsoluteValue::Cleared);
    assert_eq!(
        resolve_mode(Some(&cleared), &[option()], RangeSelectorMode::Default),
        PickerMode::Absolute
    );
}
