//! Domain layer containing the document graph and the operations over it.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (tag traits and predicates, field paths)
//! - `document` - Typed sections and entities of a planning document
//! - `validation` - ID uniqueness and traceability checks
//! - `filter` - Tag-scoped document views

pub mod document;
pub mod filter;
pub mod foundation;
pub mod validation;
