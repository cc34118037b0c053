//! Dotted field paths used to locate findings inside a document.

use std::fmt;

/// A location inside a document, rendered as `personas[2].id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// Starts a path at a top-level section.
    pub fn root(section: &str) -> Self {
        Self(section.to_string())
    }

    /// Appends a named field.
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    /// Appends a sequence index.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    /// Returns the rendered path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fields_and_indices() {
        let path = FieldPath::root("personas").index(2).field("id");
        assert_eq!(path.as_str(), "personas[2].id");
    }

    #[test]
    fn renders_nested_sections() {
        let path = FieldPath::root("roadmap")
            .field("phases")
            .index(0)
            .field("deliverables")
            .index(3)
            .field("id");
        assert_eq!(path.to_string(), "roadmap.phases[0].deliverables[3].id");
    }
}
