pub mod axis_style;
mod theme_manager;
mod theme_options;
mod theme_resolver;

pub use theme_manager::ThemeManager;
pub use theme_options::{
    CategoricalColor, CategoricalColors, CategoricalColorsSet, LineStyle, PaletteColorRef,
    ResolvedThemeOptions, SequentialColorsSet, ThemeMode, ThemeOptions,
};
