//! Report configuration
//!
//! YAML-driven defaults for every tunable of the interactive layer. The
//! compiled-in document is [`DEFAULT_REPORT_CONFIG`]; a page can replace it
//! with a global `__REPORT_CONFIG` object (same shape, JSON).
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ReportConfig::load_defaults()?;
//! let registry = config.sections.registry()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::registry::{SectionRegistry, DEFAULT_SECTIONS};

/// Default configuration, embedded at compile time
pub const DEFAULT_REPORT_CONFIG: &str = include_str!("../config/report.yaml");

// =============================================================================
// ROOT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub sections: SectionsConfig,
    pub sidebar: SidebarConfig,
    pub scroll: ScrollConfig,
    pub animation: AnimationConfig,
    pub tags: TagsConfig,
    pub comments: CommentsConfig,
    pub layout: LayoutConfig,
}

impl ReportConfig {
    /// Parse and validate the embedded defaults
    pub fn load_defaults() -> Result<Self, ConfigError> {
        Self::from_yaml(DEFAULT_REPORT_CONFIG)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded defaults, falling back to the built-in values if they fail
    /// to parse.
    pub fn load_or_default() -> Self {
        Self::load_defaults().unwrap_or_else(|e| {
            tracing::warn!("Failed to load report config: {}, using defaults", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sections.registry()?;
        if !self.sections.fetch_path.contains("{name}") {
            return Err(ConfigError::FetchPathTemplate(
                self.sections.fetch_path.clone(),
            ));
        }
        if !(self.animation.counter_duration_ms > 0.0) {
            return Err(ConfigError::CounterDuration);
        }
        Ok(())
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Section loading: registry, placeholder ids, data sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// Ordered section names
    pub names: Vec<String>,
    /// Placeholder element id = prefix + name
    pub placeholder_prefix: String,
    /// Relative fetch path; `{name}` is replaced by the section name
    pub fetch_path: String,
    /// Global holding the embedded name -> HTML map
    pub inline_global: String,
    /// Optional global zero-argument hook called after injection
    pub init_hook: String,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            names: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            placeholder_prefix: "section-".to_string(),
            fetch_path: "sections/{name}.html".to_string(),
            inline_global: "__SECTIONS".to_string(),
            init_hook: "__appInit".to_string(),
        }
    }
}

impl SectionsConfig {
    pub fn registry(&self) -> Result<SectionRegistry, ConfigError> {
        SectionRegistry::new(self.names.iter().cloned())
    }
}

// =============================================================================
// BEHAVIOURS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Opening one group closes the others
    pub exclusive_groups: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Added to scrollY when matching section anchors
    pub spy_offset_px: f64,
    /// Back-to-top shows once scrollY exceeds this
    pub back_to_top_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            spy_offset_px: 100.0,
            back_to_top_px: 400.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub counter_duration_ms: f64,
    /// Intersection ratios that trigger each one-shot animation
    pub counter_threshold: f64,
    pub bar_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    /// Per-index animation delay for stat cards
    pub stat_stagger_ms: u32,
    /// Thousands separator for integer counters (vi-VN groups with '.')
    pub group_separator: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 900.0,
            counter_threshold: 0.4,
            bar_threshold: 0.2,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -100px 0px".to_string(),
            stat_stagger_ms: 100,
            group_separator: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsConfig {
    pub default_color: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            default_color: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub key_prefix: String,
    pub placeholder_opacity: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            key_prefix: "comment_".to_string(),
            placeholder_opacity: "0.6".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports at or below this width use the drawer sidebar
    pub mobile_breakpoint_px: f64,
    pub resize_debounce_ms: i32,
    /// Class marking an open drawer, drawer overlay or lightbox
    pub open_class: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768.0,
            resize_debounce_ms: 250,
            open_class: "open".to_string(),
        }
    }
}
