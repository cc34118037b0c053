//! Requirements section - functional and non-functional requirements.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Taggable;

/// Relative importance of a story or requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", s)
    }
}

/// Quality attribute a non-functional requirement constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NfrCategory {
    Performance,
    Scalability,
    Reliability,
    Availability,
    Security,
    Privacy,
    Usability,
    Accessibility,
    Maintainability,
    Compliance,
    #[default]
    Other,
}

/// Requirements section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functional: Vec<FunctionalRequirement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_functional: Vec<NonFunctionalRequirement>,
}

impl Requirements {
    /// Returns true if neither list holds a requirement.
    pub fn is_empty(&self) -> bool {
        self.functional.is_empty() && self.non_functional.is_empty()
    }
}

/// A functional requirement traced back to user stories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionalRequirement {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// Links to UserStory.id values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_story_ids: Vec<String>,
    /// Links to Phase.id. Empty when unscheduled.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acceptance_criteria: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A quality constraint on the system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NonFunctionalRequirement {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub category: NfrCategory,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// What is measured (e.g., "p99 latency").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    /// Threshold for the metric (e.g., "< 200ms").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Taggable for FunctionalRequirement {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Taggable for NonFunctionalRequirement {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn requirement_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "FR-1",
            "title": "Bulk export",
            "priority": "high",
            "user_story_ids": ["US-1", "US-2"]
        }"#;

        let req: FunctionalRequirement = serde_json::from_str(json).unwrap();
        assert_eq!(req.priority, Priority::High);
        assert_eq!(req.user_story_ids.len(), 2);
        assert!(req.phase_id.is_empty());
        assert!(req.tags.is_empty());
    }

    #[test]
    fn nfr_category_uses_snake_case() {
        let req: NonFunctionalRequirement =
            serde_json::from_str(r#"{"title": "Fast", "category": "performance"}"#).unwrap();
        assert_eq!(req.category, NfrCategory::Performance);
    }
}
