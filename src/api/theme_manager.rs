use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{deep_clone, merge_objects};
use crate::css::CssThemeName;
use crate::error::{ThemeError, ThemeResult};
use crate::extensions::{
    ExternalizationContext, LegendExternalizer, PopoverExternalizer, ResizeManager,
};

use super::ResolvedThemeOptions;
use super::axis_style::axes_theme_options;

/// Resolved theme plus the chart options accumulated by the host.
///
/// Obtained from [`ThemeManager::resolve`]. Typical flow:
///
/// ```
/// use ods_charts::api::{ThemeManager, ThemeMode, ThemeOptions};
/// use serde_json::json;
///
/// let mut manager = ThemeManager::resolve(ThemeOptions::new().with_mode(ThemeMode::Dark));
/// // register `manager.theme()` under `manager.name()` in the charting engine
/// let options = manager
///     .set_data_options(json!({
///         "xAxis": { "data": ["shirt", "cardigan"] },
///         "yAxis": {},
///         "series": [{ "type": "bar", "data": [5, 20] }]
///     }))
///     .build_chart_options(None)
///     .expect("data options are set");
/// assert_eq!(options["xAxis"]["axisLine"]["show"], json!(true));
/// ```
pub struct ThemeManager {
    name: String,
    theme: Value,
    options: ResolvedThemeOptions,
    data_options: Option<Value>,
    legend: Option<Box<dyn LegendExternalizer>>,
    resize: Option<Box<dyn ResizeManager>>,
    popover: Option<Box<dyn PopoverExternalizer>>,
}

impl ThemeManager {
    pub(super) fn new(name: String, theme: Value, options: ResolvedThemeOptions) -> Self {
        Self {
            name,
            theme,
            options,
            data_options: None,
            legend: None,
            resize: None,
            popover: None,
        }
    }

    /// Theme identity, e.g. `ods.light.supportingColors.blue.smooth`.
    ///
    /// Use it as the registration name of [`theme`](Self::theme) in the
    /// charting engine.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn theme(&self) -> &Value {
        &self.theme
    }

    #[must_use]
    pub fn into_theme(self) -> Value {
        self.theme
    }

    #[must_use]
    pub fn options(&self) -> &ResolvedThemeOptions {
        &self.options
    }

    #[must_use]
    pub fn css_theme_name(&self) -> CssThemeName {
        self.options.css_theme.name()
    }

    #[must_use]
    pub fn data_options(&self) -> Option<&Value> {
        self.data_options.as_ref()
    }

    /// Replaces the chart data options. No validation is performed.
    ///
    /// `null` counts as "not provided" and leaves the stored options as they
    /// are.
    pub fn set_data_options(&mut self, data_options: Value) -> &mut Self {
        self.store_data_options(Some(data_options));
        self
    }

    /// Registers the legend collaborator, replacing any previous one.
    ///
    /// `data_options`, when given and not `null`, replaces the stored data
    /// options.
    pub fn externalize_legends(
        &mut self,
        legend: Box<dyn LegendExternalizer>,
        data_options: Option<Value>,
    ) -> &mut Self {
        debug!(replaced = self.legend.is_some(), "externalize legends");
        self.legend = Some(legend);
        self.store_data_options(data_options);
        self
    }

    /// Registers the popover collaborator, replacing any previous one.
    ///
    /// `data_options` is handled as in [`externalize_legends`](Self::externalize_legends).
    pub fn externalize_popover(
        &mut self,
        popover: Box<dyn PopoverExternalizer>,
        data_options: Option<Value>,
    ) -> &mut Self {
        debug!(replaced = self.popover.is_some(), "externalize popover");
        self.popover = Some(popover);
        self.store_data_options(data_options);
        self
    }

    /// Registers the resize collaborator, replacing any previous one.
    ///
    /// `data_options` is handled as in [`externalize_legends`](Self::externalize_legends).
    pub fn manage_chart_resize(
        &mut self,
        resize: Box<dyn ResizeManager>,
        data_options: Option<Value>,
    ) -> &mut Self {
        debug!(replaced = self.resize.is_some(), "manage chart resize");
        self.resize = Some(resize);
        self.store_data_options(data_options);
        self
    }

    fn store_data_options(&mut self, data_options: Option<Value>) {
        match data_options {
            Some(Value::Null) => trace!("ignore null chart data options"),
            Some(data_options) => {
                trace!("replace chart data options");
                self.data_options = Some(data_options);
            }
            None => {}
        }
    }

    #[must_use]
    pub fn has_legend_externalizer(&self) -> bool {
        self.legend.is_some()
    }

    #[must_use]
    pub fn has_popover_externalizer(&self) -> bool {
        self.popover.is_some()
    }

    #[must_use]
    pub fn has_resize_manager(&self) -> bool {
        self.resize.is_some()
    }

    /// Builds the options that complete the data options with theme styling.
    ///
    /// `data_options`, when given and not `null`, replaces the stored data
    /// options first.
    /// Registered collaborators run in order legend, resize, popover; the
    /// popover collaborator may write into the returned options.
    ///
    /// Not needed when calling [`build_chart_options`](Self::build_chart_options),
    /// which builds them internally.
    pub fn build_theme_options(&mut self, data_options: Option<Value>) -> ThemeResult<Value> {
        self.store_data_options(data_options);
        let data_options = provided(self.data_options.as_ref())?;

        let mode = self.options.mode;
        let mut theme_options = Value::Object(axes_theme_options(mode, data_options));

        let context = ExternalizationContext {
            data_options,
            colors: theme_colors(&self.theme),
            css_theme: self.options.css_theme.definition(),
            css_theme_name: self.options.css_theme.name(),
            mode,
        };
        if let Some(legend) = self.legend.as_mut() {
            legend.add_legend(&context);
        }
        if let Some(resize) = self.resize.as_mut() {
            resize.add_resize_management();
        }
        if let Some(popover) = self.popover.as_mut() {
            popover.add_popover_management(&context, &mut theme_options);
        }

        Ok(theme_options)
    }

    /// Builds the final engine options: theme options with the data options
    /// merged on top, so data options win on conflicts.
    pub fn build_chart_options(&mut self, data_options: Option<Value>) -> ThemeResult<Value> {
        let mut chart_options = self.build_theme_options(data_options)?;
        let data_options = provided(self.data_options.as_ref())?;
        merge_objects(&mut chart_options, deep_clone(data_options));
        Ok(chart_options)
    }
}

fn provided(data_options: Option<&Value>) -> ThemeResult<&Value> {
    data_options
        .filter(|data_options| !data_options.is_null())
        .ok_or(ThemeError::MissingDataOptions)
}

fn theme_colors(theme: &Value) -> &[Value] {
    theme
        .get("color")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
