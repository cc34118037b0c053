//! ID Registry - maps every declared entity ID to where it was first seen.
//!
//! IDs from every section share one namespace, since references resolve
//! against it regardless of which section declares the target. Sections are
//! walked in a fixed order so that repeated runs over an unchanged document
//! produce identical diagnostics:
//!
//! objectives (each objective, then its key results) → personas → user
//! stories → functional requirements → non-functional requirements → roadmap
//! phases (each phase, then its deliverables) → risks → problem → market →
//! solution options → decision records → assumptions → constraints.
//!
//! Empty IDs are skipped and never collide. Custom section content is opaque
//! and never searched.

use std::collections::HashMap;

use crate::domain::document::Document;
use crate::domain::foundation::FieldPath;

use super::ValidationIssue;

/// Per-call registry of declared IDs.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    locations: HashMap<String, String>,
    duplicates: Vec<ValidationIssue>,
}

impl IdRegistry {
    /// Registers every ID in `doc`, recording duplicates as they are found.
    pub fn collect(doc: &Document) -> Self {
        let mut registry = Self::default();

        let okrs = FieldPath::root("objectives").field("okrs");
        for (i, okr) in doc.objectives.okrs.iter().enumerate() {
            let okr_path = okrs.index(i);
            registry.register(&okr.objective.id, okr_path.field("objective").field("id"));
            for (j, kr) in okr.key_results.iter().enumerate() {
                registry.register(&kr.id, okr_path.field("key_results").index(j).field("id"));
            }
        }

        let personas = FieldPath::root("personas");
        for (i, persona) in doc.personas.iter().enumerate() {
            registry.register(&persona.id, personas.index(i).field("id"));
        }

        let stories = FieldPath::root("user_stories");
        for (i, story) in doc.user_stories.iter().enumerate() {
            registry.register(&story.id, stories.index(i).field("id"));
        }

        let requirements = FieldPath::root("requirements");
        let functional = requirements.field("functional");
        for (i, req) in doc.requirements.functional.iter().enumerate() {
            registry.register(&req.id, functional.index(i).field("id"));
        }
        let non_functional = requirements.field("non_functional");
        for (i, req) in doc.requirements.non_functional.iter().enumerate() {
            registry.register(&req.id, non_functional.index(i).field("id"));
        }

        let phases = FieldPath::root("roadmap").field("phases");
        for (i, phase) in doc.roadmap.phases.iter().enumerate() {
            let phase_path = phases.index(i);
            registry.register(&phase.id, phase_path.field("id"));
            for (j, deliverable) in phase.deliverables.iter().enumerate() {
                registry.register(
                    &deliverable.id,
                    phase_path.field("deliverables").index(j).field("id"),
                );
            }
        }

        let risks = FieldPath::root("risks");
        for (i, risk) in doc.risks.iter().enumerate() {
            registry.register(&risk.id, risks.index(i).field("id"));
        }

        registry.collect_optional_sections(doc);
        registry
    }

    fn collect_optional_sections(&mut self, doc: &Document) {
        if let Some(problem) = &doc.problem {
            let root = FieldPath::root("problem");
            self.register(&problem.id, root.field("id"));
            let secondary = root.field("secondary_problems");
            for (i, p) in problem.secondary_problems.iter().enumerate() {
                self.register(&p.id, secondary.index(i).field("id"));
            }
        }

        if let Some(market) = &doc.market {
            let root = FieldPath::root("market");
            let segments = root.field("segments");
            for (i, segment) in market.segments.iter().enumerate() {
                self.register(&segment.id, segments.index(i).field("id"));
            }
            let competitors = root.field("competitors");
            for (i, competitor) in market.competitors.iter().enumerate() {
                self.register(&competitor.id, competitors.index(i).field("id"));
            }
            let alternatives = root.field("alternatives");
            for (i, alternative) in market.alternatives.iter().enumerate() {
                self.register(&alternative.id, alternatives.index(i).field("id"));
            }
        }

        if let Some(solution) = &doc.solution {
            let options = FieldPath::root("solution").field("solution_options");
            for (i, option) in solution.solution_options.iter().enumerate() {
                self.register(&option.id, options.index(i).field("id"));
            }
        }

        if let Some(decisions) = &doc.decisions {
            let records = FieldPath::root("decisions").field("records");
            for (i, record) in decisions.records.iter().enumerate() {
                self.register(&record.id, records.index(i).field("id"));
            }
        }

        if let Some(section) = &doc.assumptions {
            let root = FieldPath::root("assumptions");
            let assumptions = root.field("assumptions");
            for (i, assumption) in section.assumptions.iter().enumerate() {
                self.register(&assumption.id, assumptions.index(i).field("id"));
            }
            let constraints = root.field("constraints");
            for (i, constraint) in section.constraints.iter().enumerate() {
                self.register(&constraint.id, constraints.index(i).field("id"));
            }
        }
    }

    /// Registers one ID, or records a duplicate if it was already declared.
    fn register(&mut self, id: &str, location: FieldPath) {
        if id.is_empty() {
            return;
        }
        match self.locations.get(id) {
            Some(first) => {
                self.duplicates
                    .push(ValidationIssue::duplicate_id(id, first, location));
            }
            None => {
                self.locations.insert(id.to_string(), location.into());
            }
        }
    }

    /// Returns true if `id` was declared somewhere in the document.
    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Returns where `id` was first declared.
    pub fn location(&self, id: &str) -> Option<&str> {
        self.locations.get(id).map(String::as_str)
    }

    /// Returns the ID → first location map.
    pub fn locations(&self) -> &HashMap<String, String> {
        &self.locations
    }

    /// Returns the duplicate findings, in discovery order.
    pub fn duplicates(&self) -> &[ValidationIssue] {
        &self.duplicates
    }

    /// Consumes the registry, returning its duplicate findings.
    pub fn into_duplicates(self) -> Vec<ValidationIssue> {
        self.duplicates
    }

    /// Returns the number of distinct declared IDs.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if no IDs were declared.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{
        CustomSection, Deliverable, KeyResult, Objective, Okr, Persona, Phase, Risk,
        SolutionDefinition, SolutionOption, UserStory,
    };
    use serde_json::json;

    fn persona(id: &str) -> Persona {
        Persona {
            id: id.to_string(),
            name: format!("Persona {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn registers_ids_with_their_locations() {
        let doc = Document {
            personas: vec![persona("p1"), persona("p2")],
            roadmap: crate::domain::document::Roadmap {
                phases: vec![Phase {
                    id: "ph1".to_string(),
                    deliverables: vec![Deliverable {
                        id: "d1".to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
            },
            ..Default::default()
        };

        let registry = IdRegistry::collect(&doc);
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.location("p2"), Some("personas[1].id"));
        assert_eq!(
            registry.location("d1"),
            Some("roadmap.phases[0].deliverables[0].id")
        );
        assert!(registry.duplicates().is_empty());
    }

    #[test]
    fn empty_ids_are_skipped() {
        let doc = Document {
            personas: vec![persona(""), persona("")],
            ..Default::default()
        };

        let registry = IdRegistry::collect(&doc);
        assert!(registry.is_empty());
        assert!(registry.duplicates().is_empty());
    }

    #[test]
    fn duplicate_across_sections_reports_first_location() {
        let doc = Document {
            objectives: crate::domain::document::Objectives {
                okrs: vec![Okr {
                    objective: Objective {
                        id: "X-1".to_string(),
                        ..Default::default()
                    },
                    key_results: vec![KeyResult {
                        id: "KR-1".to_string(),
                        ..Default::default()
                    }],
                }],
            },
            risks: vec![Risk {
                id: "X-1".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let registry = IdRegistry::collect(&doc);
        assert_eq!(registry.duplicates().len(), 1);
        let issue = &registry.duplicates()[0];
        assert_eq!(issue.field, "risks[0].id");
        assert!(issue.message.contains("objectives.okrs[0].objective.id"));
        assert_eq!(
            registry.location("X-1"),
            Some("objectives.okrs[0].objective.id")
        );
    }

    #[test]
    fn each_repeat_is_reported_once() {
        let doc = Document {
            personas: vec![persona("p1")],
            user_stories: vec![
                UserStory {
                    id: "p1".to_string(),
                    ..Default::default()
                },
                UserStory {
                    id: "p1".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let registry = IdRegistry::collect(&doc);
        let fields: Vec<_> = registry.duplicates().iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["user_stories[0].id", "user_stories[1].id"]);
    }

    #[test]
    fn registers_optional_sections() {
        let doc = Document {
            solution: Some(SolutionDefinition {
                solution_options: vec![SolutionOption {
                    id: "sol-1".to_string(),
                    ..Default::default()
                }],
                selected_solution_id: "sol-1".to_string(),
                rationale: None,
            }),
            ..Default::default()
        };

        let registry = IdRegistry::collect(&doc);
        assert_eq!(
            registry.location("sol-1"),
            Some("solution.solution_options[0].id")
        );
    }

    #[test]
    fn custom_section_content_is_not_searched() {
        let doc = Document {
            personas: vec![persona("p1")],
            custom_sections: vec![CustomSection {
                title: "Notes".to_string(),
                content: json!({ "id": "p1", "items": [{ "id": "p1" }] }),
            }],
            ..Default::default()
        };

        let registry = IdRegistry::collect(&doc);
        assert_eq!(registry.len(), 1);
        assert!(registry.duplicates().is_empty());
    }
}
