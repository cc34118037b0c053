//! Untaggable context sections.
//!
//! These sections carry no tags and pass through tag filtering untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Assumptions and constraints section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssumptionsConstraints {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assumptions: Vec<Assumption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

/// Something believed true but not verified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    #[serde(default)]
    pub id: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_if_false: Option<String>,
    #[serde(default)]
    pub validated: bool,
}

/// A fixed limit on the solution space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(default)]
    pub id: String,
    pub description: String,
    /// e.g. "budget", "regulatory", "technical".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Technical architecture notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalArchitecture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub integrations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technology_stack: Vec<String>,
}

/// User experience requirements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UxRequirements {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub principles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_flows: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<String>,
}

/// A term and its definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

/// An author-defined section with free-form content.
///
/// `content` is opaque: it is never searched for IDs, references or tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub content: Value,
}
