//! Command implementations.
//!
//! Each command takes the JSON text of its input and returns the text to
//! print, so the binary only handles argument parsing and I/O.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use drp_core::{
    OffsetSource, format_initial_value, format_value, join_absolute_value, normalize_time_offset,
    resolve_mode, split_absolute_value,
};
use drp_model::{FormatOptions, PendingAbsoluteValue, PickerConfig, TimeOffset, Value};
use tracing::{debug, info};

/// Read the command input from a file, or stdin for `None` / `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Load picker configuration from a JSON file, or defaults when absent.
pub fn load_config(path: Option<&Path>) -> Result<PickerConfig> {
    let Some(path) = path else {
        return Ok(PickerConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    info!(path = %path.display(), "Loaded picker configuration");
    Ok(config)
}

fn parse_value(input: &str) -> Result<Option<Value>> {
    serde_json::from_str(input).context("parse value JSON")
}

fn render<T: serde::Serialize>(output: &T) -> Result<String> {
    serde_json::to_string_pretty(output).context("serialize output")
}

fn time_offset_for(value: Option<&Value>, config: &PickerConfig) -> TimeOffset {
    let source = config
        .time_offset
        .map_or(OffsetSource::Unset, OffsetSource::Fixed);
    normalize_time_offset(value, &source)
}

/// `drp format`: the value to display or emit.
pub fn run_format(input: &str, config: &PickerConfig) -> Result<String> {
    let value = parse_value(input)?;
    let time_offset = time_offset_for(value.as_ref(), config);
    debug!(?time_offset, date_only = config.date_only, "Formatting value");
    let options = FormatOptions::new()
        .with_date_only(config.date_only)
        .with_time_offset(time_offset);
    render(&format_value(value, &options))
}

/// `drp initial`: the value the picker starts from.
pub fn run_initial(input: &str, config: &PickerConfig) -> Result<String> {
    let value = parse_value(input)?;
    let time_offset = time_offset_for(value.as_ref(), config);
    debug!(?time_offset, date_only = config.date_only, "Normalizing initial value");
    render(&format_initial_value(value, config.date_only, time_offset))
}

/// `drp mode`: whether the picker opens absolute or relative.
pub fn run_mode(input: &str, config: &PickerConfig) -> Result<String> {
    let value = parse_value(input)?;
    let mode = resolve_mode(
        value.as_ref(),
        &config.relative_options,
        config.range_selector_mode,
    );
    debug!(%mode, selector = %config.range_selector_mode, "Resolved picker mode");
    render(&mode)
}

/// `drp split`: pending inputs for an absolute value.
pub fn run_split(input: &str, table: bool) -> Result<String> {
    let pending = match parse_value(input)? {
        None => split_absolute_value(None),
        Some(Value::Absolute(absolute)) => split_absolute_value(Some(&absolute)),
        Some(Value::Relative(_)) => bail!("split expects an absolute value, got a relative one"),
    };
    if table {
        Ok(pending_table(&pending).to_string())
    } else {
        render(&pending)
    }
}

/// `drp join`: absolute value from pending inputs.
pub fn run_join(input: &str) -> Result<String> {
    let pending: PendingAbsoluteValue =
        serde_json::from_str(input).context("parse pending value JSON")?;
    render(&Value::Absolute(join_absolute_value(&pending)))
}

fn pending_table(pending: &PendingAbsoluteValue) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Boundary", "Date", "Time"]);
    for (label, parts) in [("start", &pending.start), ("end", &pending.end)] {
        table.add_row(vec![label, parts.date.as_str(), parts.time.as_str()]);
    }
    table
}
