//! Integration tests for tag-scoped document views.

use strategy_docs::config::AppConfig;
use strategy_docs::domain::document::{Document, Persona};
use strategy_docs::domain::filter::{tag_inventory, TagFilter};
use strategy_docs::{filter_by_tags, filter_by_tags_all, FilterMode};

fn fixture() -> Document {
    serde_yaml::from_str(include_str!("fixtures/data_platform_prd.yaml"))
        .expect("fixture should parse")
}

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| id(item).to_string()).collect()
}

fn persona(id: &str, tags: &[&str]) -> Persona {
    Persona {
        id: id.to_string(),
        name: id.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn or_and_scenario_over_personas() {
    let doc = Document {
        personas: vec![
            persona("p1", &["data-management"]),
            persona("p2", &["security"]),
            persona("p3", &["data-management", "privacy"]),
        ],
        ..Default::default()
    };

    assert_eq!(
        ids(&filter_by_tags(&doc, &["data-management"]).personas, |p| p.id.as_str()),
        vec!["p1", "p3"]
    );
    assert_eq!(
        ids(&filter_by_tags(&doc, &["data-management", "security"]).personas, |p| p.id.as_str()),
        vec!["p1", "p2", "p3"]
    );
    assert_eq!(
        ids(&filter_by_tags_all(&doc, &["data-management", "privacy"]).personas, |p| p.id.as_str()),
        vec!["p3"]
    );
}

#[test]
fn or_view_of_fixture() {
    let view = filter_by_tags(&fixture(), &["data-management"]);

    assert_eq!(ids(&view.personas, |p| p.id.as_str()), vec!["P-1", "P-3"]);
    assert_eq!(ids(&view.user_stories, |s| s.id.as_str()), vec!["US-1"]);
    assert_eq!(ids(&view.requirements.functional, |r| r.id.as_str()), vec!["FR-1"]);
    assert!(view.requirements.non_functional.is_empty());
    assert_eq!(ids(&view.risks, |r| r.id.as_str()), vec!["R-1"]);

    // PH-1 survives through D-1 only; PH-2 has no matching deliverable.
    assert_eq!(ids(&view.roadmap.phases, |p| p.id.as_str()), vec!["PH-1"]);
    assert_eq!(ids(&view.roadmap.phases[0].deliverables, |d| d.id.as_str()), vec!["D-1"]);

    // OBJ-1 matches itself and keeps every key result.
    assert_eq!(view.objectives.okrs.len(), 1);
    assert_eq!(ids(&view.objectives.okrs[0].key_results, |k| k.id.as_str()), vec!["KR-1", "KR-2"]);
    assert_eq!(view.objectives.okrs[0].key_results[0].phase_targets.len(), 2);

    let market = view.market.as_ref().unwrap();
    assert_eq!(ids(&market.segments, |s| s.id.as_str()), vec!["SEG-1"]);
    assert!(market.competitors.is_empty());
    assert_eq!(ids(&view.decisions.as_ref().unwrap().records, |r| r.id.as_str()), vec!["DEC-1"]);
}

#[test]
fn matching_phase_keeps_untagged_deliverables() {
    let view = filter_by_tags(&fixture(), &["privacy"]);

    assert_eq!(ids(&view.roadmap.phases, |p| p.id.as_str()), vec!["PH-2"]);
    assert_eq!(
        ids(&view.roadmap.phases[0].deliverables, |d| d.id.as_str()),
        vec!["D-3", "D-4"]
    );
    assert_eq!(view.objectives.okrs.len(), 1);
    assert_eq!(view.objectives.okrs[0].objective.id, "OBJ-2");
    assert_eq!(ids(&view.objectives.okrs[0].key_results, |k| k.id.as_str()), vec!["KR-3"]);
}

#[test]
fn and_view_of_fixture() {
    let view = filter_by_tags_all(&fixture(), &["security", "privacy"]);

    assert!(view.personas.is_empty());
    assert_eq!(ids(&view.user_stories, |s| s.id.as_str()), vec!["US-2"]);
    assert_eq!(ids(&view.requirements.non_functional, |r| r.id.as_str()), vec!["NFR-2"]);
    assert!(view.requirements.functional.is_empty());
    assert!(view.roadmap.phases.is_empty());
    assert!(view.objectives.okrs.is_empty());
}

#[test]
fn untaggable_sections_survive_any_filter() {
    let doc = fixture();
    let view = filter_by_tags_all(&doc, &["no-such-tag"]);

    assert_eq!(view.metadata, doc.metadata);
    assert_eq!(view.problem, doc.problem);
    assert_eq!(view.solution, doc.solution);
    assert_eq!(view.assumptions, doc.assumptions);
    assert_eq!(view.glossary, doc.glossary);
    assert_eq!(view.custom_sections, doc.custom_sections);
}

#[test]
fn emptied_collections_are_omitted_when_serialized() {
    let view = filter_by_tags(&fixture(), &["no-such-tag"]);
    let value = serde_json::to_value(&view).unwrap();

    for key in ["personas", "user_stories", "requirements", "roadmap", "risks", "objectives"] {
        assert!(value.get(key).is_none(), "{} should be omitted", key);
    }
    assert!(value.get("solution").is_some());
    assert!(value.get("glossary").is_some());
}

#[test]
fn configured_default_mode_drives_filtering() {
    let config = AppConfig::default();
    let doc = fixture();

    let view = doc.filter(config.filter.default_mode, &["security", "privacy"]);
    assert_eq!(view, TagFilter::apply(&doc, FilterMode::Any, &["security", "privacy"]));
    assert_eq!(ids(&view.personas, |p| p.id.as_str()), vec!["P-2", "P-3"]);
}

#[test]
fn filtered_views_of_one_source_can_be_built_concurrently() {
    let doc = fixture();
    let tags = ["data-management", "security", "privacy"];

    let views: Vec<Document> = std::thread::scope(|scope| {
        let handles: Vec<_> = tags
            .iter()
            .map(|tag| {
                let doc = &doc;
                scope.spawn(move || filter_by_tags(doc, &[*tag]))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (tag, view) in tags.iter().zip(&views) {
        assert_eq!(view, &filter_by_tags(&doc, &[*tag]));
    }
}

#[test]
fn inventory_lists_tags_in_use() {
    let inventory = tag_inventory(&fixture());
    let tags: Vec<_> = inventory.keys().map(String::as_str).collect();
    assert_eq!(tags, vec!["data-management", "privacy", "security"]);
    assert_eq!(inventory["privacy"], 5);
}
