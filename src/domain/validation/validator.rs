//! DocumentValidator - runs the ID registry and traceability checker.

use tracing::{debug, warn};

use crate::domain::document::Document;

use super::{IdRegistry, TraceabilityChecker, ValidationResult};

/// Validates documents.
///
/// Validation never fails fast: every finding in the document is reported in
/// one pass. All state is local to the call, so concurrent validations of any
/// documents are safe.
pub struct DocumentValidator;

impl DocumentValidator {
    /// Checks ID uniqueness, then cross-references.
    pub fn validate(doc: &Document) -> ValidationResult {
        let registry = IdRegistry::collect(doc);
        let references = TraceabilityChecker::check(doc, &registry);
        let declared = registry.len();

        let result = ValidationResult::from_issues(
            registry.into_duplicates().into_iter().chain(references),
        );

        for error in &result.errors {
            warn!(field = %error.field, code = %error.code, "{}", error.message);
        }
        debug!(
            declared_ids = declared,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Validated document"
        );

        result
    }
}

/// Validates `doc`. See [`DocumentValidator::validate`].
pub fn validate(doc: &Document) -> ValidationResult {
    DocumentValidator::validate(doc)
}
