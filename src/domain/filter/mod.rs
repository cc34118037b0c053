//! Filter module - tag-scoped views of a document.
//!
//! Filtering is total and pure: it never fails and always returns a freshly
//! allocated `Document`, so the same source can be filtered concurrently.

mod inventory;
mod tag_filter;

pub use inventory::{tag_inventory, taggable_count, taggable_ids};
pub use tag_filter::{filter_by_tags, filter_by_tags_all, filter_entities, filter_groups, TagFilter};
