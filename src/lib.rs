//! Strategy Docs - typed entity graphs for strategic-planning documents
//!
//! Models product, market and technical requirement sets and OKR goal
//! frameworks as a typed document graph, and provides two pure operations
//! over it:
//!
//! - **Validation** - ID uniqueness across all sections and traceability of
//!   cross-references, reported in one pass as errors and warnings.
//! - **Tag filtering** - OR/AND tag-scoped views of a document, with a
//!   parent-or-children rule for roadmap phases and OKRs.
//!
//! ```
//! use strategy_docs::domain::document::{Document, Persona};
//!
//! let doc = Document {
//!     personas: vec![Persona {
//!         id: "p1".to_string(),
//!         name: "Analyst".to_string(),
//!         tags: vec!["data-management".to_string()],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! assert!(doc.validate().is_valid());
//! assert_eq!(doc.filter_by_tags(&["security"]).personas.len(), 0);
//! ```

pub mod adapters;
pub mod config;
pub mod domain;

pub use domain::document::Document;
pub use domain::filter::{filter_by_tags, filter_by_tags_all};
pub use domain::foundation::FilterMode;
pub use domain::validation::{validate, ValidationIssue, ValidationResult};
