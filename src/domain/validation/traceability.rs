//! Traceability Checker - finds cross-references that resolve to nothing.
//!
//! | Reference                                   | Severity |
//! |---------------------------------------------|----------|
//! | `user_stories[].persona_id`                 | warning  |
//! | `user_stories[].phase_id`                   | warning  |
//! | `requirements.functional[].user_story_ids`  | warning  |
//! | `requirements.functional[].phase_id`        | warning  |
//! | `solution.solution_options[].problems_addressed` | warning |
//! | `solution.selected_solution_id`             | error    |
//!
//! Soft references resolve against every declared ID. The selected solution
//! must name one of the solution options. Empty references are unset, not
//! dangling.

use crate::domain::document::{Document, SolutionDefinition};
use crate::domain::foundation::FieldPath;

use super::{IdRegistry, ValidationIssue};

/// Checks reference fields against a registry of declared IDs.
pub struct TraceabilityChecker;

impl TraceabilityChecker {
    /// Returns one finding per unresolved reference, in document order.
    pub fn check(doc: &Document, defined: &IdRegistry) -> Vec<ValidationIssue> {
        let mut findings = Vec::new();

        let stories = FieldPath::root("user_stories");
        for (i, story) in doc.user_stories.iter().enumerate() {
            let path = stories.index(i);
            Self::check_single(
                defined,
                &story.persona_id,
                path.field("persona_id"),
                "persona",
                &mut findings,
            );
            Self::check_single(
                defined,
                &story.phase_id,
                path.field("phase_id"),
                "phase",
                &mut findings,
            );
        }

        let functional = FieldPath::root("requirements").field("functional");
        for (i, req) in doc.requirements.functional.iter().enumerate() {
            let path = functional.index(i);
            Self::check_many(
                defined,
                &req.user_story_ids,
                path.field("user_story_ids"),
                "user story",
                &mut findings,
            );
            Self::check_single(
                defined,
                &req.phase_id,
                path.field("phase_id"),
                "phase",
                &mut findings,
            );
        }

        if let Some(solution) = &doc.solution {
            let options = FieldPath::root("solution").field("solution_options");
            for (i, option) in solution.solution_options.iter().enumerate() {
                Self::check_many(
                    defined,
                    &option.problems_addressed,
                    options.index(i).field("problems_addressed"),
                    "problem",
                    &mut findings,
                );
            }
            Self::check_selection(solution, &mut findings);
        }

        findings
    }

    fn check_single(
        defined: &IdRegistry,
        id: &str,
        path: FieldPath,
        target: &str,
        findings: &mut Vec<ValidationIssue>,
    ) {
        if !id.is_empty() && !defined.contains(id) {
            findings.push(ValidationIssue::dangling_reference(path, target, id));
        }
    }

    fn check_many(
        defined: &IdRegistry,
        ids: &[String],
        path: FieldPath,
        target: &str,
        findings: &mut Vec<ValidationIssue>,
    ) {
        for (i, id) in ids.iter().enumerate() {
            Self::check_single(defined, id, path.index(i), target, findings);
        }
    }

    fn check_selection(solution: &SolutionDefinition, findings: &mut Vec<ValidationIssue>) {
        let selected = &solution.selected_solution_id;
        if !selected.is_empty() && solution.find_option(selected).is_none() {
            findings.push(ValidationIssue::unresolved_selection(
                FieldPath::root("solution").field("selected_solution_id"),
                selected,
            ));
        }
    }
}
