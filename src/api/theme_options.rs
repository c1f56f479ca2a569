use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::css::CssTheme;
use crate::error::{ThemeError, ThemeResult};

/// Display variant selecting which palette tables apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Named categorical palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoricalColorsSet {
    #[default]
    SupportingColors,
    DarkerTints,
    LighterTints,
    Blue,
    Green,
    Purple,
}

impl CategoricalColorsSet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SupportingColors => "supportingColors",
            Self::DarkerTints => "darkerTints",
            Self::LighterTints => "lighterTints",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }
}

/// Named sequential palettes used by visual maps (heatmaps and the like).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequentialColorsSet {
    #[default]
    Blue,
    Green,
    Purple,
}

impl SequentialColorsSet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }
}

/// Line rendering style for line charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    Broken,
    #[default]
    Smooth,
    WithPoints,
}

impl LineStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Broken => "broken",
            Self::Smooth => "smooth",
            Self::WithPoints => "withPoints",
        }
    }
}

macro_rules! impl_value_from_name {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl From<$kind> for Value {
                fn from(kind: $kind) -> Self {
                    Value::from(kind.as_str())
                }
            }
        )+
    };
}

impl_value_from_name!(ThemeMode, CategoricalColorsSet, SequentialColorsSet, LineStyle);

/// Reference to one entry of a predefined categorical palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColorRef {
    pub color_palette: CategoricalColorsSet,
    pub color_index: usize,
}

impl PaletteColorRef {
    #[must_use]
    pub const fn new(color_palette: CategoricalColorsSet, color_index: usize) -> Self {
        Self {
            color_palette,
            color_index,
        }
    }
}

/// One entry of a custom categorical color list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoricalColor {
    /// Any color string understood by the charting engine.
    Literal(String),
    Palette(PaletteColorRef),
}

impl From<&str> for CategoricalColor {
    fn from(color: &str) -> Self {
        Self::Literal(color.to_owned())
    }
}

impl From<String> for CategoricalColor {
    fn from(color: String) -> Self {
        Self::Literal(color)
    }
}

impl From<PaletteColorRef> for CategoricalColor {
    fn from(reference: PaletteColorRef) -> Self {
        Self::Palette(reference)
    }
}

/// Categorical colors: either a named palette or an explicit ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoricalColors {
    Set(CategoricalColorsSet),
    Custom(Vec<CategoricalColor>),
}

impl Default for CategoricalColors {
    fn default() -> Self {
        Self::Set(CategoricalColorsSet::default())
    }
}

impl From<CategoricalColorsSet> for CategoricalColors {
    fn from(set: CategoricalColorsSet) -> Self {
        Self::Set(set)
    }
}

impl From<Vec<CategoricalColor>> for CategoricalColors {
    fn from(colors: Vec<CategoricalColor>) -> Self {
        Self::Custom(colors)
    }
}

/// Theme request supplied by the host. Every field is optional.
///
/// The JSON form uses the same camelCase keys as the JavaScript API, so
/// persisted configurations can be loaded with [`ThemeOptions::from_json_str`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ThemeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categorical_colors: Option<CategoricalColors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_map_color: Option<SequentialColorsSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_theme: Option<CssTheme>,
}

impl ThemeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ThemeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_categorical_colors(mut self, colors: impl Into<CategoricalColors>) -> Self {
        self.categorical_colors = Some(colors.into());
        self
    }

    #[must_use]
    pub fn with_visual_map_color(mut self, set: SequentialColorsSet) -> Self {
        self.visual_map_color = Some(set);
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_css_theme(mut self, css_theme: CssTheme) -> Self {
        self.css_theme = Some(css_theme);
        self
    }

    /// Fills every unset field with its default.
    #[must_use]
    pub fn resolve(self) -> ResolvedThemeOptions {
        ResolvedThemeOptions {
            mode: self.mode.unwrap_or_default(),
            categorical_colors: self.categorical_colors.unwrap_or_default(),
            visual_map_color: self.visual_map_color.unwrap_or_default(),
            line_style: self.line_style.unwrap_or_default(),
            css_theme: self.css_theme.unwrap_or_default(),
        }
    }

    pub fn from_json_str(input: &str) -> ThemeResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ThemeError::InvalidData(format!("failed to parse theme options: {e}")))
    }

    pub fn to_json_pretty(&self) -> ThemeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ThemeError::InvalidData(format!("failed to serialize theme options: {e}"))
        })
    }
}

/// Theme options after defaulting; no field is left unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedThemeOptions {
    pub mode: ThemeMode,
    pub categorical_colors: CategoricalColors,
    pub visual_map_color: SequentialColorsSet,
    pub line_style: LineStyle,
    pub css_theme: CssTheme,
}

impl From<ResolvedThemeOptions> for ThemeOptions {
    fn from(resolved: ResolvedThemeOptions) -> Self {
        Self {
            mode: Some(resolved.mode),
            categorical_colors: Some(resolved.categorical_colors),
            visual_map_color: Some(resolved.visual_map_color),
            line_style: Some(resolved.line_style),
            css_theme: Some(resolved.css_theme),
        }
    }
}
