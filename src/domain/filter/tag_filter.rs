//! TagFilter - builds a tag-scoped view of a document.
//!
//! # Policy
//!
//! - No tags requested: the view is a copy of the document.
//! - Flat collections keep the entities whose own tags match.
//! - Groups (roadmap phase → deliverables, OKR → key results) use the
//!   parent-or-children rule: a matching parent keeps all of its children;
//!   otherwise the parent survives only with its matching children; with no
//!   matching child it is dropped.
//! - Phase targets travel with their key result and are never filtered.
//! - Untaggable sections (problem, solution, assumptions, architecture, UX,
//!   glossary, custom sections) pass through unchanged.
//!
//! OR and AND views differ only in the predicate used at each match.

use tracing::debug;

use crate::domain::document::{
    DecisionsDefinition, Document, MarketDefinition, Objectives, Requirements, Roadmap,
};
use crate::domain::foundation::{FilterMode, Taggable, TaggableGroup};

use super::inventory;

/// Tag-scoped document filtering.
pub struct TagFilter;

impl TagFilter {
    /// Returns a new document holding only the entities that match `tags`.
    ///
    /// Never fails: tags matching nothing yield a document with emptied
    /// taggable collections.
    pub fn apply<S: AsRef<str>>(doc: &Document, mode: FilterMode, tags: &[S]) -> Document {
        if tags.is_empty() {
            return doc.clone();
        }

        let filtered = Document {
            metadata: doc.metadata.clone(),
            objectives: Objectives {
                okrs: filter_groups(&doc.objectives.okrs, mode, tags),
            },
            personas: filter_entities(&doc.personas, mode, tags),
            user_stories: filter_entities(&doc.user_stories, mode, tags),
            requirements: Requirements {
                functional: filter_entities(&doc.requirements.functional, mode, tags),
                non_functional: filter_entities(&doc.requirements.non_functional, mode, tags),
            },
            roadmap: Roadmap {
                phases: filter_groups(&doc.roadmap.phases, mode, tags),
            },
            risks: filter_entities(&doc.risks, mode, tags),
            problem: doc.problem.clone(),
            market: doc.market.as_ref().map(|market| MarketDefinition {
                segments: filter_entities(&market.segments, mode, tags),
                competitors: filter_entities(&market.competitors, mode, tags),
                alternatives: filter_entities(&market.alternatives, mode, tags),
                differentiation: market.differentiation.clone(),
            }),
            solution: doc.solution.clone(),
            decisions: doc.decisions.as_ref().map(|decisions| DecisionsDefinition {
                records: filter_entities(&decisions.records, mode, tags),
            }),
            assumptions: doc.assumptions.clone(),
            technical_architecture: doc.technical_architecture.clone(),
            ux_requirements: doc.ux_requirements.clone(),
            glossary: doc.glossary.clone(),
            custom_sections: doc.custom_sections.clone(),
        };

        debug!(
            mode = %mode,
            tags = tags.len(),
            before = inventory::taggable_count(doc),
            after = inventory::taggable_count(&filtered),
            "Filtered document by tags"
        );

        filtered
    }
}

/// Keeps entities whose own tags satisfy `mode`.
pub fn filter_entities<T, S>(items: &[T], mode: FilterMode, tags: &[S]) -> Vec<T>
where
    T: Taggable + Clone,
    S: AsRef<str>,
{
    items
        .iter()
        .filter(|item| mode.matches(item.tags(), tags))
        .cloned()
        .collect()
}

/// Applies the parent-or-children rule to each group.
pub fn filter_groups<G, S>(groups: &[G], mode: FilterMode, tags: &[S]) -> Vec<G>
where
    G: TaggableGroup + Clone,
    S: AsRef<str>,
{
    groups
        .iter()
        .filter_map(|group| {
            if mode.matches(group.tags(), tags) {
                return Some(group.clone());
            }
            let children = filter_entities(group.children(), mode, tags);
            if children.is_empty() {
                None
            } else {
                Some(group.with_children(children))
            }
        })
        .collect()
}

/// Returns entities carrying any of `tags`.
pub fn filter_by_tags<S: AsRef<str>>(doc: &Document, tags: &[S]) -> Document {
    TagFilter::apply(doc, FilterMode::Any, tags)
}

/// Returns entities carrying all of `tags`.
pub fn filter_by_tags_all<S: AsRef<str>>(doc: &Document, tags: &[S]) -> Document {
    TagFilter::apply(doc, FilterMode::All, tags)
}
