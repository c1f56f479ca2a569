//! ods-charts: Orange Design System theming for ECharts-style chart engines.
//!
//! The crate resolves a declarative [`ThemeOptions`] request into a complete
//! theme object, then completes host chart options with axis styling and the
//! contributions of externalized legends, popovers and resize handling.
//! Configurations are plain `serde_json::Value` trees so they pass through
//! to the engine unchanged.

pub mod api;
pub mod core;
pub mod css;
pub mod error;
pub mod extensions;
pub mod palette;
pub mod telemetry;

pub use api::{ThemeManager, ThemeMode, ThemeOptions};
pub use error::{ThemeError, ThemeResult};
