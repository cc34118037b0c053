//! Decisions section - lightweight decision records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Taggable;

/// Lifecycle of a decision record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    #[default]
    Proposed,
    Accepted,
    Rejected,
    Superseded,
}

/// Decisions section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionsDefinition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<DecisionRecord>,
}

/// One recorded decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    #[serde(default)]
    pub id: String,
    pub decision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives_considered: Vec<String>,
    #[serde(default)]
    pub status: DecisionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Taggable for DecisionRecord {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}
