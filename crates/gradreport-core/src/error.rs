//! Error types for the report's interactive layer

use thiserror::Error;

/// Section loading failures. Any one of these aborts the whole load stage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("HTTP {status} for {section}")]
    Status { section: String, status: u16 },

    #[error("fetch failed for {section}: {message}")]
    Transport { section: String, message: String },

    #[error("embedded section data is malformed: {0}")]
    Embedded(String),
}

impl LoadError {
    /// Section the failure is tagged with, if any
    pub fn section(&self) -> Option<&str> {
        match self {
            Self::Status { section, .. } | Self::Transport { section, .. } => Some(section),
            Self::Embedded(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid report config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid report config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("section registry is empty")]
    EmptyRegistry,

    #[error("section name must not be blank")]
    BlankSectionName,

    #[error("duplicate section name '{0}'")]
    DuplicateSection(String),

    #[error("fetch path '{0}' has no {{name}} placeholder")]
    FetchPathTemplate(String),

    #[error("counter duration must be positive")]
    CounterDuration,
}

/// Malformed declarative attribute values (`data-count`, `data-pct`, ...)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage write rejected for '{key}': {message}")]
    WriteRejected { key: String, message: String },
}
