//! Objectives section - OKRs with key results and per-phase targets.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Taggable, TaggableGroup};

/// Goal framework section holding the document's OKRs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Objectives {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub okrs: Vec<Okr>,
}

impl Objectives {
    /// Returns true if no OKRs are present.
    pub fn is_empty(&self) -> bool {
        self.okrs.is_empty()
    }
}

/// One objective and the key results that measure it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Okr {
    pub objective: Objective,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_results: Vec<KeyResult>,
}

/// A qualitative objective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    #[serde(default)]
    pub id: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A measurable outcome for an objective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyResult {
    #[serde(default)]
    pub id: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Targets per roadmap phase. These travel with the key result when filtering.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phase_targets: Vec<PhaseTarget>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// The value a key result should reach by the end of a phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTarget {
    /// Links to Phase.id in the roadmap.
    pub phase_id: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Taggable for Objective {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Taggable for KeyResult {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// An OKR is tagged through its objective.
impl Taggable for Okr {
    fn tags(&self) -> &[String] {
        &self.objective.tags
    }
}

impl TaggableGroup for Okr {
    type Child = KeyResult;

    fn children(&self) -> &[KeyResult] {
        &self.key_results
    }

    fn with_children(&self, children: Vec<KeyResult>) -> Self {
        Self {
            objective: self.objective.clone(),
            key_results: children,
        }
    }
}
