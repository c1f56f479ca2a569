use serde_json::{Map, Value, json};
use tracing::trace;

use super::ThemeMode;

/// Axis keys of the data options that receive theme styling.
pub const STYLED_AXES: [&str; 2] = ["xAxis", "yAxis"];

const AXIS_LINE_COLOR: &str = "#CCCCCC";

#[must_use]
pub fn axis_label_style(mode: ThemeMode) -> Value {
    let color = match mode {
        ThemeMode::Light => "rgba(0, 0, 0, 1)",
        ThemeMode::Dark => "#FFFFFF",
    };
    json!({
        "fontStyle": "normal",
        "fontWeight": "700",
        "fontSize": 14,
        "fontFamily": "Helvetica Neue, sans-serif",
        "color": color
    })
}

#[must_use]
pub fn axis_line_style() -> Value {
    json!({
        "show": true,
        "lineStyle": { "width": 2, "color": AXIS_LINE_COLOR }
    })
}

#[must_use]
pub fn split_line_style() -> Value {
    json!({
        "show": true,
        "lineStyle": { "width": 1, "color": AXIS_LINE_COLOR }
    })
}

/// Axis and split lines are drawn only for an axis carrying category `data`
/// or an explicit `axisLine` setting. `null` and `false` count as unset, and
/// a missing or non-mapping axis entry hides both lines.
#[must_use]
pub fn axis_lines_visible(data_options: &Value, axis: &str) -> bool {
    let Some(axis_options) = data_options.get(axis).and_then(Value::as_object) else {
        return false;
    };
    is_set(axis_options.get("data")) || is_set(axis_options.get("axisLine"))
}

/// Theme contribution for every axis in [`STYLED_AXES`].
#[must_use]
pub fn axes_theme_options(mode: ThemeMode, data_options: &Value) -> Map<String, Value> {
    let mut options = Map::new();
    for axis in STYLED_AXES {
        let visible = axis_lines_visible(data_options, axis);
        trace!(axis, visible, "axis line visibility");
        let (axis_line, split_line) = if visible {
            (axis_line_style(), split_line_style())
        } else {
            (json!({ "show": false }), json!({ "show": false }))
        };
        options.insert(
            axis.to_owned(),
            json!({
                "axisLabel": axis_label_style(mode),
                "axisLine": axis_line,
                "splitLine": split_line
            }),
        );
    }
    options
}

/// Absent, `null`, `false`, `0` and `""` count as unset.
fn is_set(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64() != Some(0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_false_axis_line_hides_lines() {
        let data = json!({ "xAxis": { "axisLine": false }, "yAxis": { "axisLine": { "show": true } } });
        assert!(!axis_lines_visible(&data, "xAxis"));
        assert!(axis_lines_visible(&data, "yAxis"));
    }

    #[test]
    fn zero_and_empty_string_count_as_unset() {
        let data = json!({
            "xAxis": { "data": "", "axisLine": 0 },
            "yAxis": { "data": [], "axisLine": 0 }
        });
        assert!(!axis_lines_visible(&data, "xAxis"));
        assert!(axis_lines_visible(&data, "yAxis"));
        assert!(axis_lines_visible(&json!({ "xAxis": { "axisLine": 1 } }), "xAxis"));
    }

    #[test]
    fn missing_axis_hides_lines() {
        assert!(!axis_lines_visible(&json!({ "series": [] }), "yAxis"));
        assert!(!axis_lines_visible(&json!({ "xAxis": [{ "data": [1] }] }), "xAxis"));
    }
}
