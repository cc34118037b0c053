//! Solution section - candidate solutions and the selected one.

use serde::{Deserialize, Serialize};

/// Solution definition section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionDefinition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solution_options: Vec<SolutionOption>,
    /// Must name one of `solution_options`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub selected_solution_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl SolutionDefinition {
    /// Finds a solution option by ID.
    pub fn find_option(&self, id: &str) -> Option<&SolutionOption> {
        self.solution_options.iter().find(|o| o.id == id)
    }

    /// Returns the selected option, if the selection resolves.
    pub fn selected(&self) -> Option<&SolutionOption> {
        self.find_option(&self.selected_solution_id)
    }
}

/// A candidate solution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionOption {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Links to problem IDs from the problem section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub problems_addressed: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tradeoffs: Vec<String>,
}
