//! Tests for drp-model types and their JSON representation.

use drp_model::{
    AbsoluteValue, DateTimeParts, DrpError, PendingAbsoluteValue, PickerConfig, RangeSelectorMode,
    RelativeOption, RelativeValue, TimeOffset, TimeUnit, Value,
};

#[test]
fn absolute_value_json_shape() {
    let value = Value::absolute("2024-01-01T10:00:00", "2024-01-02T10:00:00");
    insta::assert_json_snapshot!(value, @r#"
    {
      "type": "absolute",
      "startDate": "2024-01-01T10:00:00",
      "endDate": "2024-01-02T10:00:00"
    }
    "#);
}

#[test]
fn relative_value_json_shape() {
    let value = Value::Relative(RelativeValue::new(7, TimeUnit::Day).with_key("previous-7-days"));
    insta::assert_json_snapshot!(value, @r#"
    {
      "type": "relative",
      "key": "previous-7-days",
      "amount": 7,
      "unit": "day"
    }
    "#);
}

#[test]
fn cleared_value_uses_empty_strings_on_the_wire() {
    let json = serde_json::to_string(&Value::Absolute(AbsoluteValue::Cleared)).expect("serialize");
    assert_eq!(json, r#"{"type":"absolute","startDate":"","endDate":""}"#);

    let parsed: Value = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, Value::Absolute(AbsoluteValue::Cleared));
}

#[test]
fn relative_value_without_key() {
    let parsed: Value =
        serde_json::from_str(r#"{"type":"relative","amount":3,"unit":"month"}"#).expect("parse");
    assert_eq!(parsed, Value::Relative(RelativeValue::new(3, TimeUnit::Month)));
}

#[test]
fn unknown_value_type_is_rejected() {
    let result: Result<Value, _> =
        serde_json::from_str(r#"{"type":"fuzzy","startDate":"","endDate":""}"#);
    assert!(result.is_err());
}

#[test]
fn time_offset_json() {
    let known: TimeOffset = serde_json::from_str(r#"{"startDate":-120,"endDate":60}"#).expect("known");
    assert_eq!(
        known,
        TimeOffset::Known {
            start_date: -120,
            end_date: 60
        }
    );

    let unknown: TimeOffset = serde_json::from_str("{}").expect("unknown");
    assert_eq!(unknown, TimeOffset::Unknown);
    assert_eq!(serde_json::to_string(&unknown).expect("serialize"), "{}");
}

#[test]
fn partial_time_offset_is_rejected() {
    let result: Result<TimeOffset, _> = serde_json::from_str(r#"{"startDate":30}"#);
    let error = result.expect_err("partial offset");
    assert!(error.to_string().contains("both startDate and endDate"));

    assert_eq!(
        TimeOffset::from_parts(None, Some(30)),
        Err(DrpError::PartialTimeOffset {
            start: None,
            end: Some(30)
        })
    );
}

#[test]
fn pending_value_json() {
    let pending: PendingAbsoluteValue = serde_json::from_str(
        r#"{"start":{"date":"2024-01-01","time":"10:00"},"end":{"date":"","time":""}}"#,
    )
    .expect("pending");
    assert_eq!(pending.start.date, "2024-01-01");
    assert_eq!(pending.start.time, "10:00");
    assert_eq!(pending.end, DateTimeParts::default());
}

#[test]
fn picker_config_defaults() {
    let config: PickerConfig = serde_json::from_str("{}").expect("config");
    assert_eq!(config, PickerConfig::default());
    assert!(!config.date_only);
    assert_eq!(config.range_selector_mode, RangeSelectorMode::Default);
    assert!(config.relative_options.is_empty());
    assert_eq!(config.time_offset, None);
}

#[test]
fn picker_config_from_host_json() {
    let config: PickerConfig = serde_json::from_str(
        r#"{
            "dateOnly": true,
            "rangeSelectorMode": "relative-only",
            "relativeOptions": [{"key": "previous-5-minutes", "amount": 5, "unit": "minute"}],
            "timeOffset": 120
        }"#,
    )
    .expect("config");
    assert_eq!(
        config,
        PickerConfig::new()
            .with_date_only(true)
            .with_range_selector_mode(RangeSelectorMode::RelativeOnly)
            .with_relative_options(vec![RelativeOption::new(
                "previous-5-minutes",
                5,
                TimeUnit::Minute
            )])
            .with_time_offset(Some(120))
    );
}

#[test]
fn relative_option_converts_to_value() {
    let option = RelativeOption::new("previous-1-hour", 1, TimeUnit::Hour);
    let value = RelativeValue::from(&option);
    assert_eq!(value.key.as_deref(), Some("previous-1-hour"));
    assert_eq!(value.amount, 1);
    assert_eq!(value.unit, TimeUnit::Hour);
}
