use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::core::{deep_clone, key_of, merge_objects};
use crate::palette::{self, ModePalette};

use super::{
    CategoricalColor, CategoricalColors, ResolvedThemeOptions, ThemeManager, ThemeOptions,
};

const THEME_NAME_PREFIX: &str = "ods";

impl ThemeManager {
    /// Resolves `options` into a theme and returns the manager bound to it.
    ///
    /// Unset options take their defaults (light mode, supporting colors, blue
    /// visual map, smooth lines, no CSS framework). Fragments are deep-cloned
    /// from the static tables and merged in this order: project defaults,
    /// mode common, mode axis lines, categorical colors, sequential colors,
    /// line style.
    #[must_use]
    pub fn resolve(options: ThemeOptions) -> Self {
        let options = options.resolve();
        let palette = palette::mode_palette(options.mode);
        let (categorical_fragment, categorical_key) =
            categorical_fragment(palette, &options.categorical_colors);
        let name = theme_name(&options, &categorical_key);

        let mut theme = deep_clone(palette::project_defaults());
        merge_objects(&mut theme, deep_clone(palette.common()));
        merge_objects(&mut theme, deep_clone(palette.lines_axis()));
        merge_objects(&mut theme, categorical_fragment);
        merge_objects(
            &mut theme,
            deep_clone(palette.sequential_colors(options.visual_map_color)),
        );
        merge_objects(&mut theme, deep_clone(palette::line_style(options.line_style)));

        debug!(
            theme = %name,
            css_theme = options.css_theme.name().as_str(),
            "resolved chart theme"
        );
        Self::new(name, theme, options)
    }
}

/// Builds the categorical color fragment and the value its name segment is
/// derived from. Custom lists resolve palette references against the current
/// mode; a reference past the end of its palette resolves to `null`.
fn categorical_fragment(palette: &ModePalette, colors: &CategoricalColors) -> (Value, Value) {
    match colors {
        CategoricalColors::Set(set) => (
            deep_clone(palette.categorical_colors(*set)),
            Value::from(*set),
        ),
        CategoricalColors::Custom(entries) => {
            let resolved: Vec<Value> = entries
                .iter()
                .map(|entry| match entry {
                    CategoricalColor::Literal(color) => Value::from(color.as_str()),
                    CategoricalColor::Palette(reference) => palette
                        .categorical_color(reference.color_palette, reference.color_index)
                        .cloned()
                        .unwrap_or_else(|| {
                            warn!(
                                palette = reference.color_palette.as_str(),
                                index = reference.color_index,
                                "categorical color reference out of range"
                            );
                            Value::Null
                        }),
                })
                .collect();
            (json!({ "color": resolved.clone() }), Value::Array(resolved))
        }
    }
}

fn theme_name(options: &ResolvedThemeOptions, categorical_key: &Value) -> String {
    [
        key_of(&options.mode.into()),
        key_of(categorical_key),
        key_of(&options.visual_map_color.into()),
        key_of(&options.line_style.into()),
    ]
    .into_iter()
    .fold(THEME_NAME_PREFIX.to_owned(), |name, segment| {
        format!("{name}.{segment}")
    })
}
