//! Document module - the typed entity graph of a strategic-planning document.
//!
//! A `Document` is a tree of disjoint sections. Entities in different
//! sections share one flat ID namespace, and reference each other by ID
//! (`persona_id`, `phase_id`, `user_story_ids`, `problems_addressed`,
//! `selected_solution_id`).
//!
//! Documents are plain values: validation reads them and filtering returns a
//! new one. Neither mutates its input.

mod context;
mod decisions;
mod market;
mod objectives;
mod personas;
mod problem;
mod requirements;
mod risks;
mod roadmap;
mod solution;
mod user_stories;

pub use context::{
    Assumption, AssumptionsConstraints, Constraint, CustomSection, GlossaryTerm,
    TechnicalArchitecture, UxRequirements,
};
pub use decisions::{DecisionRecord, DecisionStatus, DecisionsDefinition};
pub use market::{Alternative, Competitor, MarketDefinition, MarketSegment};
pub use objectives::{KeyResult, Objective, Objectives, Okr, PhaseTarget};
pub use personas::Persona;
pub use problem::{Problem, ProblemDefinition};
pub use requirements::{
    FunctionalRequirement, NfrCategory, NonFunctionalRequirement, Priority, Requirements,
};
pub use risks::{Risk, RiskLevel, RiskStatus};
pub use roadmap::{Deliverable, DeliverableStatus, Phase, Roadmap};
pub use solution::{SolutionDefinition, SolutionOption};
pub use user_stories::UserStory;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::filter::TagFilter;
use crate::domain::foundation::FilterMode;
use crate::domain::validation::{DocumentValidator, ValidationResult};

/// Editorial state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    InReview,
    Approved,
    Deprecated,
}

/// Document header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<NaiveDate>,
}

/// The root aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default, skip_serializing_if = "Objectives::is_empty")]
    pub objectives: Objectives,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub personas: Vec<Persona>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_stories: Vec<UserStory>,

    #[serde(default, skip_serializing_if = "Requirements::is_empty")]
    pub requirements: Requirements,

    #[serde(default, skip_serializing_if = "Roadmap::is_empty")]
    pub roadmap: Roadmap,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risks: Vec<Risk>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<ProblemDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<SolutionDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decisions: Option<DecisionsDefinition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumptions: Option<AssumptionsConstraints>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_architecture: Option<TechnicalArchitecture>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ux_requirements: Option<UxRequirements>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glossary: Vec<GlossaryTerm>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_sections: Vec<CustomSection>,
}

impl Document {
    /// Checks ID uniqueness and cross-references.
    pub fn validate(&self) -> ValidationResult {
        DocumentValidator::validate(self)
    }

    /// Returns a view keeping entities that carry any of `tags`.
    pub fn filter_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Document {
        TagFilter::apply(self, FilterMode::Any, tags)
    }

    /// Returns a view keeping entities that carry all of `tags`.
    pub fn filter_by_tags_all<S: AsRef<str>>(&self, tags: &[S]) -> Document {
        TagFilter::apply(self, FilterMode::All, tags)
    }

    /// Returns a view filtered with an explicit mode.
    pub fn filter<S: AsRef<str>>(&self, mode: FilterMode, tags: &[S]) -> Document {
        TagFilter::apply(self, mode, tags)
    }
}
