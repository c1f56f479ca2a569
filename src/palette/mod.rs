//! Static theme fragment tables.
//!
//! Each table is built once on first access and never mutated afterwards.
//! Callers must [`deep_clone`](crate::core::deep_clone) a fragment before
//! merging it into a theme.

mod dark;
mod light;
mod shared;

use once_cell::sync::Lazy;
use serde_json::{Value, json};

use crate::api::{CategoricalColorsSet, LineStyle, SequentialColorsSet, ThemeMode};

/// Fragments that depend on the display mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ModePalette {
    common: Value,
    lines_axis: Value,
    supporting_colors: Value,
    darker_tints: Value,
    lighter_tints: Value,
    categorical_blue: Value,
    categorical_green: Value,
    categorical_purple: Value,
    sequential_blue: Value,
    sequential_green: Value,
    sequential_purple: Value,
}

impl ModePalette {
    /// Background, text and component colors.
    #[must_use]
    pub fn common(&self) -> &Value {
        &self.common
    }

    /// Axis line, tick and split-line styling.
    #[must_use]
    pub fn lines_axis(&self) -> &Value {
        &self.lines_axis
    }

    /// `{"color": [...]}` fragment for a categorical set.
    #[must_use]
    pub fn categorical_colors(&self, set: CategoricalColorsSet) -> &Value {
        match set {
            CategoricalColorsSet::SupportingColors => &self.supporting_colors,
            CategoricalColorsSet::DarkerTints => &self.darker_tints,
            CategoricalColorsSet::LighterTints => &self.lighter_tints,
            CategoricalColorsSet::Blue => &self.categorical_blue,
            CategoricalColorsSet::Green => &self.categorical_green,
            CategoricalColorsSet::Purple => &self.categorical_purple,
        }
    }

    /// Single entry of a categorical set, `None` past the end of the set.
    #[must_use]
    pub fn categorical_color(&self, set: CategoricalColorsSet, index: usize) -> Option<&Value> {
        self.categorical_colors(set).get("color")?.get(index)
    }

    /// `{"visualMapColor": [...]}` fragment for a sequential set.
    #[must_use]
    pub fn sequential_colors(&self, set: SequentialColorsSet) -> &Value {
        match set {
            SequentialColorsSet::Blue => &self.sequential_blue,
            SequentialColorsSet::Green => &self.sequential_green,
            SequentialColorsSet::Purple => &self.sequential_purple,
        }
    }
}

static LIGHT: Lazy<ModePalette> = Lazy::new(light::palette);
static DARK: Lazy<ModePalette> = Lazy::new(dark::palette);
static PROJECT: Lazy<Value> = Lazy::new(shared::project);
static LINE_BROKEN: Lazy<Value> = Lazy::new(shared::line_broken);
static LINE_SMOOTH: Lazy<Value> = Lazy::new(shared::line_smooth);
static LINE_WITH_POINTS: Lazy<Value> = Lazy::new(shared::line_with_points);

#[must_use]
pub fn mode_palette(mode: ThemeMode) -> &'static ModePalette {
    match mode {
        ThemeMode::Light => &*LIGHT,
        ThemeMode::Dark => &*DARK,
    }
}

/// Project-wide defaults every theme starts from.
#[must_use]
pub fn project_defaults() -> &'static Value {
    &*PROJECT
}

/// Line-series fragment; identical in both modes.
#[must_use]
pub fn line_style(style: LineStyle) -> &'static Value {
    match style {
        LineStyle::Broken => &*LINE_BROKEN,
        LineStyle::Smooth => &*LINE_SMOOTH,
        LineStyle::WithPoints => &*LINE_WITH_POINTS,
    }
}

fn color_fragment(colors: &[&str]) -> Value {
    json!({ "color": colors })
}

fn visual_map_fragment(colors: &[&str]) -> Value {
    json!({ "visualMapColor": colors })
}
