//! Foundation module - Shared domain primitives.
//!
//! Contains the tag capability traits, tag predicates, filter mode and field
//! paths that the document, validation and filter modules build on.

mod field_path;
mod filter_mode;
mod tags;

pub use field_path::FieldPath;
pub use filter_mode::FilterMode;
pub use tags::{matches_all, matches_any, Taggable, TaggableGroup};
