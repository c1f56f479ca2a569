pub mod key;
pub mod merge;

pub use key::key_of;
pub use merge::{deep_clone, merge_objects};
