//! User stories section.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Taggable;

use super::Priority;

/// A user story, optionally linked to a persona and a roadmap phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStory {
    #[serde(default)]
    pub id: String,
    pub title: String,
    /// Links to Persona.id. Empty when unassigned.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub persona_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acceptance_criteria: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    /// Links to Phase.id. Empty when unscheduled.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Taggable for UserStory {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_links_are_omitted_when_serialized() {
        let story = UserStory {
            id: "US-1".to_string(),
            title: "Export data".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&story).unwrap();
        assert!(value.get("persona_id").is_none());
        assert!(value.get("phase_id").is_none());
        assert!(value.get("tags").is_none());
    }
}
