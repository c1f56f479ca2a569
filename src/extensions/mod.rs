//! Collaborator interfaces for UI fragments rendered outside the charting
//! engine (legends, popovers) and for resize handling.

pub mod externalization;

pub use externalization::{
    ExternalizationContext, LegendExternalizer, PopoverExternalizer, ResizeManager,
};
