//! Validation findings and the aggregated report.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::FieldPath;

/// Whether a finding blocks downstream processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Violates a hard invariant of the document graph.
    Error,
    /// Advisory; the document is still usable.
    Warning,
}

/// Classification of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Two entities declare the same ID.
    DuplicateId,
    /// `solution.selected_solution_id` names no solution option.
    UnresolvedSelection,
    /// A soft reference names no declared entity.
    DanglingReference,
}

impl IssueCode {
    /// Returns the severity every finding with this code carries.
    pub fn severity(&self) -> Severity {
        match self {
            IssueCode::DuplicateId | IssueCode::UnresolvedSelection => Severity::Error,
            IssueCode::DanglingReference => Severity::Warning,
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IssueCode::DuplicateId => "DUPLICATE_ID",
            IssueCode::UnresolvedSelection => "UNRESOLVED_SELECTION",
            IssueCode::DanglingReference => "DANGLING_REFERENCE",
        };
        write!(f, "{}", s)
    }
}

/// A single finding located at a field path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path of the offending field, e.g. `user_stories[0].persona_id`.
    pub field: String,
    pub message: String,
    pub code: IssueCode,
}

impl ValidationIssue {
    /// Creates a duplicate ID finding located at the second declaration.
    pub fn duplicate_id(id: &str, first: &str, second: FieldPath) -> Self {
        Self {
            message: format!(
                "duplicate ID '{}' at {}, first defined at {}",
                id, second, first
            ),
            field: second.into(),
            code: IssueCode::DuplicateId,
        }
    }

    /// Creates a finding for a selection that names no solution option.
    pub fn unresolved_selection(field: FieldPath, id: &str) -> Self {
        Self {
            field: field.into(),
            message: format!("selected solution '{}' does not match any solution option", id),
            code: IssueCode::UnresolvedSelection,
        }
    }

    /// Creates a finding for a reference to an undeclared entity.
    ///
    /// `target` names what the reference should point at (e.g. "persona").
    pub fn dangling_reference(field: FieldPath, target: &str, id: &str) -> Self {
        Self {
            field: field.into(),
            message: format!("{} '{}' is not defined", target, id),
            code: IssueCode::DanglingReference,
        }
    }

    /// Returns the severity implied by the issue code.
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// How strictly a caller treats warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Fail on traceability warnings as well as structural errors.
    #[serde(default)]
    pub warnings_as_errors: bool,
}

impl ValidationPolicy {
    /// Policy failing on warnings too.
    pub fn strict() -> Self {
        Self {
            warnings_as_errors: true,
        }
    }
}

/// Outcome of validating one document.
///
/// `valid` is true iff `errors` is empty; warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<ValidationIssue>,
    #[serde(default)]
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Creates an empty, valid result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Builds a result by sorting findings into errors and warnings, keeping order.
    pub fn from_issues(issues: impl IntoIterator<Item = ValidationIssue>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = issues
            .into_iter()
            .partition(|issue| issue.severity() == Severity::Error);

        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Returns true if no structural errors were found.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns true if any warnings were found.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the total number of findings.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Returns true if the result is acceptable under `policy`.
    pub fn passes(&self, policy: &ValidationPolicy) -> bool {
        self.valid && !(policy.warnings_as_errors && self.has_warnings())
    }

    /// Combines two results, appending `other`'s findings after this one's.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.valid = self.errors.is_empty();
        self
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}
