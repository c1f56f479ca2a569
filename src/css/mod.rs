//! CSS decoration catalog for externalized legends and popovers.
//!
//! A [`CssThemeDefinition`] maps the semantic element names of generated
//! legend and popover markup to classes and inline styles. The crate ships a
//! small catalog of presets (see [`CssThemeName`]); hosts using another CSS
//! framework supply their own definition.

mod presets;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Semantic element names used in legend markup.
pub mod legend_item {
    pub const HOLDER: &str = "odsChartsLegendHolder";
    pub const CONTAINER: &str = "odsChartsLegendContainer";
    pub const LINK: &str = "odsChartsLegendLink";
    pub const LINK_OPACITY: &str = "odsChartsLegendLinkOpacity";
    pub const COLOR_HOLDER: &str = "odsChartsLegendColorHolder";
    pub const COLOR: &str = "odsChartsLegendColor";
    pub const LABEL: &str = "odsChartsLegendLabel";
}

/// Semantic element names used in popover and tooltip markup.
pub mod popover_item {
    pub const POPOVER: &str = "odsChartsPopover";
    pub const HOLDER: &str = "odsChartsPopoverHolder";
    pub const INNER: &str = "odsChartsPopoverInner";
    pub const CONTENT: &str = "odsChartsPopoverContent";
    pub const ARROW: &str = "odsChartsPopoverArrow";
    pub const HEADER: &str = "odsChartsPopoverHeader";
    pub const BODY: &str = "odsChartsPopoverBody";
    pub const BODY_CONTENT: &str = "odsChartsPopoverBodyContent";
    pub const LINE: &str = "odsChartsPopoverLine";
    pub const COLOR_HOLDER: &str = "odsChartsPopoverColorHolder";
    pub const COLOR: &str = "odsChartsPopoverColor";
    pub const TEXT: &str = "odsChartsPopoverText";
    pub const LABEL: &str = "odsChartsPopoverLabel";
    pub const VALUE: &str = "odsChartsPopoverValue";
}

/// Classes and inline styles added to one generated element.
///
/// Both parts are optional; an empty definition contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssItemDefinition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub styles: IndexMap<String, String>,
}

impl CssItemDefinition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Value for a `class` attribute: classes joined by a single space.
    #[must_use]
    pub fn class_list(&self) -> String {
        self.classes.join(" ")
    }

    /// Value for a `style` attribute, e.g. `width: 10px; height: 10px`.
    #[must_use]
    pub fn style_list(&self) -> String {
        self.styles
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Element name to decoration mapping for one group of generated markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssItemGroup(IndexMap<String, CssItemDefinition>);

impl CssItemGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, item: CssItemDefinition) -> Self {
        self.0.insert(name.into(), item);
        self
    }

    #[must_use]
    pub fn item(&self, name: &str) -> Option<&CssItemDefinition> {
        self.0.get(name)
    }

    /// `class` attribute for `name`, empty when the element is not decorated.
    #[must_use]
    pub fn class_list(&self, name: &str) -> String {
        self.item(name)
            .map(CssItemDefinition::class_list)
            .unwrap_or_default()
    }

    /// `style` attribute for `name`, empty when the element is not decorated.
    #[must_use]
    pub fn style_list(&self, name: &str) -> String {
        self.item(name)
            .map(CssItemDefinition::style_list)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssItemDefinition)> {
        self.0.iter().map(|(name, item)| (name.as_str(), item))
    }
}

/// Classes and styles for generated legend and popover markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssThemeDefinition {
    #[serde(default)]
    pub legends: CssItemGroup,
    #[serde(default)]
    pub popover: CssItemGroup,
}

/// Names of the shipped CSS presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CssThemeName {
    /// Self-contained styling, no CSS framework on the page.
    #[default]
    None,
    Boosted4,
    Boosted5,
    /// Host-supplied definition.
    Custom,
}

impl CssThemeName {
    pub const PRESETS: [Self; 3] = [Self::Boosted4, Self::Boosted5, Self::None];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Boosted4 => "BOOSTED4",
            Self::Boosted5 => "BOOSTED5",
            Self::Custom => "CUSTOM",
        }
    }

    /// Catalog definition for this name. `Custom` maps to an empty definition.
    #[must_use]
    pub fn definition(self) -> &'static CssThemeDefinition {
        match self {
            Self::None => &*presets::NONE,
            Self::Boosted4 => &*presets::BOOSTED4,
            Self::Boosted5 => &*presets::BOOSTED5,
            Self::Custom => &*presets::CUSTOM,
        }
    }

    /// Finds the preset whose definition equals `definition`, falling back to
    /// `Custom`.
    #[must_use]
    pub fn classify(definition: &CssThemeDefinition) -> Self {
        Self::PRESETS
            .into_iter()
            .find(|name| name.definition() == definition)
            .unwrap_or(Self::Custom)
    }
}

/// A CSS definition tagged with the catalog entry it was selected from.
///
/// In JSON it is either a preset name (`"BOOSTED5"`) or a definition object;
/// definition objects are classified with [`CssThemeName::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CssThemeRepr", into = "CssThemeRepr")]
pub struct CssTheme {
    name: CssThemeName,
    definition: CssThemeDefinition,
}

impl CssTheme {
    #[must_use]
    pub fn preset(name: CssThemeName) -> Self {
        Self {
            name,
            definition: name.definition().clone(),
        }
    }

    /// Host-supplied definition, always tagged `Custom`.
    #[must_use]
    pub fn custom(definition: CssThemeDefinition) -> Self {
        Self {
            name: CssThemeName::Custom,
            definition,
        }
    }

    /// Definition of unknown origin, tagged by comparing it to the catalog.
    #[must_use]
    pub fn from_definition(definition: CssThemeDefinition) -> Self {
        Self {
            name: CssThemeName::classify(&definition),
            definition,
        }
    }

    #[must_use]
    pub fn name(&self) -> CssThemeName {
        self.name
    }

    #[must_use]
    pub fn definition(&self) -> &CssThemeDefinition {
        &self.definition
    }
}

impl Default for CssTheme {
    fn default() -> Self {
        Self::preset(CssThemeName::None)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CssThemeRepr {
    Named(CssThemeName),
    Definition(CssThemeDefinition),
}

impl From<CssThemeRepr> for CssTheme {
    fn from(repr: CssThemeRepr) -> Self {
        match repr {
            CssThemeRepr::Named(name) => Self::preset(name),
            CssThemeRepr::Definition(definition) => Self::from_definition(definition),
        }
    }
}

impl From<CssTheme> for CssThemeRepr {
    fn from(theme: CssTheme) -> Self {
        match theme.name {
            CssThemeName::Custom => Self::Definition(theme.definition),
            name => Self::Named(name),
        }
    }
}
