//! Validation module - structural and referential checks over a document.
//!
//! # Components
//!
//! - `IdRegistry` - declared ID → first location, with duplicate detection
//! - `TraceabilityChecker` - dangling reference detection
//! - `DocumentValidator` - runs both and aggregates a `ValidationResult`
//!
//! Duplicate IDs and an unresolved `selected_solution_id` are errors and make
//! the document invalid. Dangling soft references are warnings only.

mod id_registry;
mod result;
mod traceability;
mod validator;

pub use id_registry::IdRegistry;
pub use result::{IssueCode, Severity, ValidationIssue, ValidationPolicy, ValidationResult};
pub use traceability::TraceabilityChecker;
pub use validator::{validate, DocumentValidator};
