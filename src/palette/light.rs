use serde_json::json;

use super::{ModePalette, color_fragment, visual_map_fragment};

const TEXT: &str = "#000000";
const MUTED_TEXT: &str = "#595959";
const BACKGROUND: &str = "#FFFFFF";
const GRID_LINE: &str = "#CCCCCC";

const BLUE_RAMP: [&str; 6] = ["#B5E8F7", "#80CEEF", "#4BB4E6", "#3E9DD6", "#237ECA", "#085EBD"];
const GREEN_RAMP: [&str; 6] = ["#B8EBD6", "#84D5AF", "#50BE87", "#27A971", "#11904E", "#0A6E31"];
const PURPLE_RAMP: [&str; 6] = ["#D9C2F0", "#C1A4E4", "#A885D8", "#9373BD", "#6E4AA7", "#492191"];

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
                "backgroundColor": BACKGROUND,
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
        supporting_colors: color_fragment(&["#4BB4E6", "#50BE87", "#FFB4E6", "#A885D8", "#FFD200"]),
        darker_tints: color_fragment(&["#085EBD", "#0A6E31", "#FF8AD4", "#492191", "#B98F11"]),
        lighter_tints: color_fragment(&["#B5E8F7", "#B8EBD6", "#FFE8F7", "#D9C2F0", "#FFF6B6"]),
        categorical_blue: color_fragment(&BLUE_RAMP),
        categorical_green: color_fragment(&GREEN_RAMP),
        categorical_purple: color_fragment(&PURPLE_RAMP),
        sequential_blue: visual_map_fragment(&BLUE_RAMP),
        sequential_green: visual_map_fragment(&GREEN_RAMP),
        sequential_purple: visual_map_fragment(&PURPLE_RAMP),
    }
}
