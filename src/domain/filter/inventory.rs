//! Tag inventory - enumerates taggable entities and the tags in use.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::document::Document;
use crate::domain::foundation::Taggable;

/// Calls `visit` with the ID and tags of every taggable entity, in document order.
fn for_each_taggable(doc: &Document, mut visit: impl FnMut(&str, &[String])) {
    for okr in &doc.objectives.okrs {
        visit(&okr.objective.id, okr.objective.tags());
        for kr in &okr.key_results {
            visit(&kr.id, kr.tags());
        }
    }
    for persona in &doc.personas {
        visit(&persona.id, persona.tags());
    }
    for story in &doc.user_stories {
        visit(&story.id, story.tags());
    }
    for req in &doc.requirements.functional {
        visit(&req.id, req.tags());
    }
    for req in &doc.requirements.non_functional {
        visit(&req.id, req.tags());
    }
    for phase in &doc.roadmap.phases {
        visit(&phase.id, phase.tags());
        for deliverable in &phase.deliverables {
            visit(&deliverable.id, deliverable.tags());
        }
    }
    for risk in &doc.risks {
        visit(&risk.id, risk.tags());
    }
    if let Some(market) = &doc.market {
        for segment in &market.segments {
            visit(&segment.id, segment.tags());
        }
        for competitor in &market.competitors {
            visit(&competitor.id, competitor.tags());
        }
        for alternative in &market.alternatives {
            visit(&alternative.id, alternative.tags());
        }
    }
    if let Some(decisions) = &doc.decisions {
        for record in &decisions.records {
            visit(&record.id, record.tags());
        }
    }
}

/// Counts how many taggable entities carry each tag.
pub fn tag_inventory(doc: &Document) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for_each_taggable(doc, |_, tags| {
        for tag in tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    });
    counts
}

/// Returns the non-empty IDs of every taggable entity.
pub fn taggable_ids(doc: &Document) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    for_each_taggable(doc, |id, _| {
        if !id.is_empty() {
            ids.insert(id.to_string());
        }
    });
    ids
}

/// Counts taggable entities, tagged or not.
pub fn taggable_count(doc: &Document) -> usize {
    let mut count = 0;
    for_each_taggable(doc, |_, _| count += 1);
    count
}
