//! Risks section.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Taggable;

/// Qualitative rating used for both probability and impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Handling state of a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    #[default]
    Open,
    Mitigating,
    Accepted,
    Closed,
}

/// A project or product risk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    #[serde(default)]
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub probability: RiskLevel,
    #[serde(default)]
    pub impact: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub status: RiskStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Taggable for Risk {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}
