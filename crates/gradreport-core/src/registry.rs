//! Section registry - the fixed, ordered list of loadable page sections

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Sections of the Graduation Score Analysis report, in page order
pub const DEFAULT_SECTIONS: [&str; 8] = [
    "s1-overview",
    "s2-pipeline",
    "s3-theory",
    "s4-subjects",
    "s5-foreign",
    "s6-cluster",
    "s7-hypothesis",
    "s8-corr",
];

/// A named fragment of page markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub html: String,
}

/// Ordered, duplicate-free section names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    names: Vec<String>,
}

impl SectionRegistry {
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        for name in &names {
            if name.trim().is_empty() {
                return Err(ConfigError::BlankSectionName);
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateSection(name.clone()));
            }
        }

        Ok(Self { names })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self {
            names: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Placeholder element id for a section
pub fn placeholder_id(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_order() {
        let registry = SectionRegistry::default();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names.first(), Some(&"s1-overview"));
        assert_eq!(names.last(), Some(&"s8-corr"));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(matches!(
            SectionRegistry::new(Vec::<String>::new()),
            Err(ConfigError::EmptyRegistry)
        ));
        assert!(matches!(
            SectionRegistry::new(["a", "  "]),
            Err(ConfigError::BlankSectionName)
        ));
    }

    #[test]
    fn test_placeholder_id() {
        assert_eq!(placeholder_id("section-", "s3-theory"), "section-s3-theory");
    }
}
