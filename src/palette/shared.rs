use serde_json::{Value, json};

const FONT_FAMILY: &str = "Helvetica Neue, sans-serif";

pub(super) fn project() -> Value {
    json!({
        "textStyle": {
            "fontFamily": FONT_FAMILY,
            "fontSize": 14,
            "fontWeight": "normal"
        },
        "title": {
            "textStyle": { "fontSize": 18, "fontWeight": "bold" },
            "subtextStyle": { "fontSize": 14 }
        },
        "legend": {
            "icon": "rect",
            "itemWidth": 10,
            "itemHeight": 10,
            "itemGap": 24
        },
        "grid": {
            "left": 60,
            "right": 20,
            "top": 40,
            "bottom": 40,
            "containLabel": true
        },
        "bar": {
            "barMaxWidth": 40,
            "itemStyle": { "borderRadius": 0 }
        },
        "pie": {
            "itemStyle": { "borderWidth": 2 }
        },
        "line": {
            "lineStyle": { "width": 3 },
            "symbolSize": 8
        }
    })
}

pub(super) fn line_broken() -> Value {
    json!({
        "line": {
            "smooth": false,
            "symbol": "none",
            "showSymbol": false
        }
    })
}

pub(super) fn line_smooth() -> Value {
    json!({
        "line": {
            "smooth": true,
            "symbol": "none",
            "showSymbol": false
        }
    })
}

pub(super) fn line_with_points() -> Value {
    json!({
        "line": {
            "smooth": false,
            "symbol": "circle",
            "showSymbol": true
        }
    })
}
