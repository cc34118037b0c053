//! FilterMode enum selecting OR or AND tag matching.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tags::{matches_all, matches_any};

/// How a set of filter tags is matched against an entity's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Keep entities carrying at least one requested tag.
    #[default]
    Any,
    /// Keep entities carrying every requested tag.
    All,
}

impl FilterMode {
    /// Applies this mode's predicate to one entity.
    pub fn matches<S: AsRef<str>>(self, entity_tags: &[String], filter_tags: &[S]) -> bool {
        match self {
            FilterMode::Any => matches_any(entity_tags, filter_tags),
            FilterMode::All => matches_all(entity_tags, filter_tags),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilterMode::Any => "any",
            FilterMode::All => "all",
        };
        write!(f, "{}", s)
    }
}
