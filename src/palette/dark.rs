use serde_json::json;

use super::{ModePalette, color_fragment, visual_map_fragment};

const TEXT: &str = "#FFFFFF";
const MUTED_TEXT: &str = "#999999";
const BACKGROUND: &str = "#000000";
const SURFACE: &str = "#141414";
const GRID_LINE: &str = "#666666";

// Dark ramps run from the darkest tint to the lightest.
const BLUE_RAMP: [&str; 6] = ["#085EBD", "#237ECA", "#3E9DD6", "#4BB4E6", "#80CEEF", "#B5E8F7"];
const GREEN_RAMP: [&str; 6] = ["#0A6E31", "#11904E", "#27A971", "#50BE87", "#84D5AF", "#B8EBD6"];
const PURPLE_RAMP: [&str; 6] = ["#492191", "#6E4AA7", "#9373BD", "#A885D8", "#C1A4E4", "#D9C2F0"];

pub(super) fn palette() -> ModePalette {
    ModePalette {
        common: json!({
            "backgroundColor": BACKGROUND,
            "textStyle": { "color": TEXT },
            "title": {
                "textStyle": { "color": TEXT },
                "subtextStyle": { "color": MUTED_TEXT }
            },
            "legend": {
                "textStyle": { "color": TEXT },
                "inactiveColor": GRID_LINE
            },
            "tooltip": {
                "backgroundColor": SURFACE,
                "borderColor": GRID_LINE,
                "textStyle": { "color": TEXT }
            },
            "visualMap": {
                "textStyle": { "color": TEXT }
            },
            "dataZoom": {
                "textStyle": { "color": TEXT },
                "borderColor": GRID_LINE
            }
        }),
        lines_axis: json!({
            "categoryAxis": {
                "axisLine": { "show": true, "lineStyle": { "color": GRID_LINE } },
                "axisTick": { "show": false },
                "axisLabel": { "show": true, "color": TEXT },
                "splitLine": { "show": false, "lineStyle": { "color": [GRID_LINE] } }
            },
            "valueAxis": {
                "axisLine": { "show": false, "lineStyle": { "color": GRID_LINE } },
                "axisTick": { "show": false },
                "axisLabel": { "show": true, "color": TEXT },
                "splitLine": { "show": true, "lineStyle": { "color": [GRID_LINE] } }
            },
            "logAxis": {
                "axisLine": { "show": false, "lineStyle": { "color": GRID_LINE } },
                "axisTick": { "show": false },
                "axisLabel": { "show": true, "color": TEXT },
                "splitLine": { "show": true, "lineStyle": { "color": [GRID_LINE] } }
            },
            "timeAxis": {
                "axisLine": { "show": true, "lineStyle": { "color": GRID_LINE } },
                "axisTick": { "show": false },
                "axisLabel": { "show": true, "color": TEXT },
                "splitLine": { "show": false, "lineStyle": { "color": [GRID_LINE] } }
            }
        }),
        supporting_colors: color_fragment(&["#66C6F7", "#6ACB9A", "#FFC5EA", "#BB9EE0", "#FFDD33"]),
        darker_tints: color_fragment(&["#4BB4E6", "#50BE87", "#FFB4E6", "#A885D8", "#FFD200"]),
        lighter_tints: color_fragment(&["#D6F2FB", "#D9F3E8", "#FFF2FA", "#ECE0F8", "#FFFAD9"]),
        categorical_blue: color_fragment(&BLUE_RAMP),
        categorical_green: color_fragment(&GREEN_RAMP),
        categorical_purple: color_fragment(&PURPLE_RAMP),
        sequential_blue: visual_map_fragment(&BLUE_RAMP),
        sequential_green: visual_map_fragment(&GREEN_RAMP),
        sequential_purple: visual_map_fragment(&PURPLE_RAMP),
    }
}
