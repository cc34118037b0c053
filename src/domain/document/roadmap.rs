//! Roadmap section - phases and their deliverables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Taggable, TaggableGroup};

/// Delivery progress of a deliverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

/// Roadmap section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phases: Vec<Phase>,
}

impl Roadmap {
    /// Returns true if no phases are planned.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

/// A time-boxed roadmap phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deliverables: Vec<Deliverable>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success_criteria: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Something a phase ships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: DeliverableStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Taggable for Phase {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Taggable for Deliverable {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl TaggableGroup for Phase {
    type Child = Deliverable;

    fn children(&self) -> &[Deliverable] {
        &self.deliverables
    }

    fn with_children(&self, children: Vec<Deliverable>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            goals: self.goals.clone(),
            deliverables: children,
            success_criteria: self.success_criteria.clone(),
            tags: self.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_dates_parse_from_iso_strings() {
        let json = r#"{
            "id": "ph1",
            "name": "MVP",
            "start_date": "2026-01-05",
            "end_date": "2026-03-31"
        }"#;

        let phase: Phase = serde_json::from_str(json).unwrap();
        assert_eq!(phase.start_date, NaiveDate::from_ymd_opt(2026, 1, 5));
        assert!(phase.deliverables.is_empty());
    }

    #[test]
    fn with_children_replaces_only_deliverables() {
        let phase = Phase {
            id: "ph1".to_string(),
            name: "MVP".to_string(),
            goals: vec!["Ship".to_string()],
            deliverables: vec![Deliverable {
                id: "d1".to_string(),
                ..Default::default()
            }],
            tags: vec!["core".to_string()],
            ..Default::default()
        };

        let emptied = phase.with_children(Vec::new());
        assert_eq!(emptied.id, "ph1");
        assert_eq!(emptied.goals, phase.goals);
        assert_eq!(emptied.tags, phase.tags);
        assert!(emptied.deliverables.is_empty());
    }
}
