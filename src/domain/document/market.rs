//! Market section - segments, competitors and alternatives users have today.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Taggable;

/// Market definition section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketDefinition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<MarketSegment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competitors: Vec<Competitor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Alternative>,
    /// Free-text positioning statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub differentiation: Option<String>,
}

/// A group of customers addressed by the product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSegment {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form size estimate (e.g., "$2B TAM").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A competing product or company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A way users solve the problem today (including doing nothing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_insufficient: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Taggable for MarketSegment {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Taggable for Competitor {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Taggable for Alternative {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}
