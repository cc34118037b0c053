//! Tag matching primitives.
//!
//! Tags are exact-match, case-sensitive labels. There is no hierarchy, no
//! wildcarding and no normalization: `"Security"` and `"security"` are
//! different tags.

/// An entity carrying an optional list of tags.
pub trait Taggable {
    /// Returns the entity's own tags (empty when untagged).
    fn tags(&self) -> &[String];
}

/// A taggable entity that owns a list of taggable children.
///
/// Groups are filtered with the parent-or-children policy: a parent whose own
/// tags match keeps every child, otherwise it survives only with the children
/// that match.
pub trait TaggableGroup: Taggable {
    /// The child entity type.
    type Child: Taggable + Clone;

    /// Returns the group's children.
    fn children(&self) -> &[Self::Child];

    /// Returns a copy of this group holding `children` in place of its own.
    fn with_children(&self, children: Vec<Self::Child>) -> Self;
}

/// Returns true if the entity carries at least one of the filter tags.
///
/// An untagged entity never matches. Callers decide what an empty filter means.
pub fn matches_any<S: AsRef<str>>(entity_tags: &[String], filter_tags: &[S]) -> bool {
    filter_tags
        .iter()
        .any(|wanted| entity_tags.iter().any(|tag| tag == wanted.as_ref()))
}

/// Returns true if the entity carries every one of the filter tags.
///
/// The entity may carry additional tags.
pub fn matches_all<S: AsRef<str>>(entity_tags: &[String], filter_tags: &[S]) -> bool {
    filter_tags
        .iter()
        .all(|wanted| entity_tags.iter().any(|tag| tag == wanted.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_any_requires_non_empty_intersection() {
        let entity = tags(&["data-management", "privacy"]);
        assert!(matches_any(&entity, &["privacy"]));
        assert!(matches_any(&entity, &["security", "data-management"]));
        assert!(!matches_any(&entity, &["security"]));
    }

    #[test]
    fn matches_all_requires_every_filter_tag() {
        let entity = tags(&["data-management", "privacy", "gdpr"]);
        assert!(matches_all(&entity, &["data-management", "privacy"]));
        assert!(!matches_all(&entity, &["data-management", "security"]));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let entity = tags(&["Security"]);
        assert!(!matches_any(&entity, &["security"]));
        assert!(!matches_all(&entity, &["security"]));
    }

    #[test]
    fn untagged_entity_never_matches_non_empty_filter() {
        let entity: Vec<String> = Vec::new();
        assert!(!matches_any(&entity, &["x"]));
        assert!(!matches_all(&entity, &["x"]));
    }

    #[test]
    fn accepts_owned_filter_tags() {
        let entity = tags(&["x"]);
        let filter = vec!["x".to_string()];
        assert!(matches_any(&entity, &filter));
        assert!(matches_all(&entity, &filter));
    }
}
