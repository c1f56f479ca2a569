use serde_json::Value;

use crate::api::ThemeMode;
use crate::css::{CssThemeDefinition, CssThemeName};

/// Read-only state handed to legend and popover collaborators each time
/// theme options are built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalizationContext<'a> {
    /// Caller-supplied chart data options.
    pub data_options: &'a Value,
    /// Resolved categorical color list of the theme.
    pub colors: &'a [Value],
    pub css_theme: &'a CssThemeDefinition,
    pub css_theme_name: CssThemeName,
    pub mode: ThemeMode,
}

/// Renders the chart legend outside the charting engine, in host markup.
///
/// Implementations are created by the host with whatever wiring they need
/// (live chart handle, container selector) and registered through
/// [`ThemeManager::externalize_legends`](crate::api::ThemeManager::externalize_legends).
pub trait LegendExternalizer {
    fn add_legend(&mut self, context: &ExternalizationContext<'_>);
}

/// Renders tooltips and popovers outside the charting engine.
///
/// Unlike legends, popover management usually has to reconfigure the
/// engine's own tooltip, so it also receives the theme options being built.
pub trait PopoverExternalizer {
    fn add_popover_management(
        &mut self,
        context: &ExternalizationContext<'_>,
        theme_options: &mut Value,
    );
}

/// Keeps the chart sized to its container.
pub trait ResizeManager {
    fn add_resize_management(&mut self);
}
