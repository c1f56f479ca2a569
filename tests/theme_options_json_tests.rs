use ods_charts::ThemeError;
use ods_charts::api::{
    CategoricalColor, CategoricalColors, CategoricalColorsSet, LineStyle, PaletteColorRef,
    SequentialColorsSet, ThemeManager, ThemeMode, ThemeOptions,
};
use ods_charts::css::{CssTheme, CssThemeName, legend_item};

#[test]
fn options_parse_from_javascript_style_json() {
    let options = ThemeOptions::from_json_str(
        r#"{
            "mode": "dark",
            "categoricalColors": "lighterTints",
            "visualMapColor": "green",
            "lineStyle": "withPoints",
            "cssTheme": "BOOSTED5"
        }"#,
    )
    .expect("valid options");

    assert_eq!(options.mode, Some(ThemeMode::Dark));
    assert_eq!(
        options.categorical_colors,
        Some(CategoricalColors::Set(CategoricalColorsSet::LighterTints))
    );
    assert_eq!(options.visual_map_color, Some(SequentialColorsSet::Green));
    assert_eq!(options.line_style, Some(LineStyle::WithPoints));
    assert_eq!(options.css_theme, Some(CssTheme::preset(CssThemeName::Boosted5)));

    let manager = ThemeManager::resolve(options);
    assert_eq!(manager.name(), "ods.dark.lighterTints.green.withPoints");
}

#[test]
fn custom_color_list_parses_references_and_literals() {
    let options = ThemeOptions::from_json_str(
        r##"{
            "categoricalColors": [
                { "colorPalette": "supportingColors", "colorIndex": 2 },
                "#FF7900"
            ]
        }"##,
    )
    .expect("valid options");

    assert_eq!(
        options.categorical_colors,
        Some(CategoricalColors::Custom(vec![
            CategoricalColor::Palette(PaletteColorRef::new(
                CategoricalColorsSet::SupportingColors,
                2
            )),
            CategoricalColor::Literal("#FF7900".to_owned()),
        ]))
    );
}

#[test]
fn css_definition_object_is_classified() {
    let options = ThemeOptions::from_json_str(
        r#"{
            "cssTheme": {
                "legends": { "odsChartsLegendHolder": { "classes": ["ods-charts-no-css-lib"] } },
                "popover": {
                    "odsChartsPopoverHolder": { "classes": ["ods-charts-no-css-lib"] },
                    "odsChartsPopover": { "classes": ["ods-charts-no-css-lib"] },
                    "odsChartsPopoverBodyContent": { "classes": ["ods-charts-no-css-lib"] },
                    "odsChartsPopoverLine": { "classes": ["ods-charts-no-css-lib"] }
                }
            }
        }"#,
    )
    .expect("valid options");
    assert_eq!(
        options.css_theme.as_ref().map(CssTheme::name),
        Some(CssThemeName::None)
    );

    let custom = ThemeOptions::from_json_str(
        r#"{ "cssTheme": { "legends": { "odsChartsLegendLink": { "styles": { "color": "red" } } } } }"#,
    )
    .expect("valid options");
    let css_theme = custom.css_theme.expect("css theme set");
    assert_eq!(css_theme.name(), CssThemeName::Custom);
    assert_eq!(
        css_theme.definition().legends.style_list(legend_item::LINK),
        "color: red"
    );
    assert!(css_theme.definition().popover.is_empty());
}

#[test]
fn invalid_options_report_invalid_data() {
    let err = ThemeOptions::from_json_str(r#"{ "mode": "sepia" }"#).expect_err("unknown mode");
    assert!(matches!(err, ThemeError::InvalidData(_)));
    assert!(err.to_string().contains("failed to parse theme options"));
}

#[test]
fn serialized_options_round_trip_through_resolution() {
    let options = ThemeOptions::new()
        .with_mode(ThemeMode::Dark)
        .with_css_theme(CssTheme::preset(CssThemeName::Boosted4));
    let json = options.to_json_pretty().expect("serialize");
    assert!(json.contains("\"BOOSTED4\""));
    assert!(!json.contains("lineStyle"));

    let manager = ThemeManager::resolve(ThemeOptions::from_json_str(&json).expect("parse"));
    assert_eq!(manager.options().mode, ThemeMode::Dark);
    assert_eq!(manager.css_theme_name(), CssThemeName::Boosted4);

    let resolved: ThemeOptions = manager.options().clone().into();
    let resolved_json = resolved.to_json_pretty().expect("serialize resolved");
    assert!(resolved_json.contains("\"supportingColors\""));
    assert!(resolved_json.contains("\"smooth\""));
}
