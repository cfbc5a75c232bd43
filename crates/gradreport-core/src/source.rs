//! Section sources
//!
//! Two interchangeable strategies produce the name -> HTML map:
//! - [`InlineSource`]: a map already resident in the page (works from `file://`)
//! - [`FetchSource`]: one GET per registry name, joined all-or-nothing
//!
//! [`Strategy::select`] picks inline iff the embedded map exists at start-up.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::error::LoadError;
use crate::registry::{Section, SectionRegistry};

/// Section name -> raw HTML
pub type SectionMap = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Inline,
    Fetch,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Inline => "inline",
            SourceKind::Fetch => "fetch",
        }
    }
}

#[async_trait(?Send)]
pub trait SectionSource {
    fn kind(&self) -> SourceKind;

    /// Produce HTML for the registry's sections
    async fn load(&self, registry: &SectionRegistry) -> Result<SectionMap, LoadError>;
}

// =============================================================================
// INLINE
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct InlineSource {
    sections: SectionMap,
}

impl InlineSource {
    pub fn new(sections: SectionMap) -> Self {
        Self { sections }
    }
}

#[async_trait(?Send)]
impl SectionSource for InlineSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Inline
    }

    async fn load(&self, registry: &SectionRegistry) -> Result<SectionMap, LoadError> {
        let mut map = SectionMap::with_capacity(registry.len());
        for name in registry.names() {
            match self.sections.get(name) {
                Some(html) => {
                    map.insert(name.to_string(), html.clone());
                }
                None => tracing::debug!(section = name, "no embedded html, skipping"),
            }
        }
        Ok(map)
    }
}

// =============================================================================
// FETCH
// =============================================================================

/// Result of a single GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal text GET, implemented over `window.fetch` in the browser
#[async_trait(?Send)]
pub trait Fetcher {
    /// `Err` carries a transport failure message; HTTP errors come back as
    /// a response with a non-2xx status.
    async fn get_text(&self, path: &str) -> Result<FetchResponse, String>;
}

pub struct FetchSource<F> {
    fetcher: F,
    path_template: String,
}

impl<F: Fetcher> FetchSource<F> {
    pub fn new(fetcher: F, path_template: impl Into<String>) -> Self {
        Self {
            fetcher,
            path_template: path_template.into(),
        }
    }

    pub fn path_for(&self, name: &str) -> String {
        self.path_template.replace("{name}", name)
    }

    async fn fetch_one(&self, name: &str) -> Result<Section, LoadError> {
        let path = self.path_for(name);
        let response =
            self.fetcher
                .get_text(&path)
                .await
                .map_err(|message| LoadError::Transport {
                    section: name.to_string(),
                    message,
                })?;

        if !response.is_success() {
            return Err(LoadError::Status {
                section: name.to_string(),
                status: response.status,
            });
        }

        Ok(Section {
            name: name.to_string(),
            html: response.body,
        })
    }
}

#[async_trait(?Send)]
impl<F: Fetcher> SectionSource for FetchSource<F> {
    fn kind(&self) -> SourceKind {
        SourceKind::Fetch
    }

    async fn load(&self, registry: &SectionRegistry) -> Result<SectionMap, LoadError> {
        let sections = try_join_all(registry.names().map(|name| self.fetch_one(name))).await?;
        Ok(sections.into_iter().map(|s| (s.name, s.html)).collect())
    }
}

// =============================================================================
// SELECTION
// =============================================================================

pub enum Strategy<F> {
    Inline(InlineSource),
    Fetch(FetchSource<F>),
}

impl<F: Fetcher> Strategy<F> {
    /// Inline when an embedded map is present, otherwise fetch
    pub fn select(embedded: Option<SectionMap>, fetcher: F, path_template: &str) -> Self {
        match embedded {
            Some(map) => Strategy::Inline(InlineSource::new(map)),
            None => Strategy::Fetch(FetchSource::new(fetcher, path_template)),
        }
    }
}

#[async_trait(?Send)]
impl<F: Fetcher> SectionSource for Strategy<F> {
    fn kind(&self) -> SourceKind {
        match self {
            Strategy::Inline(s) => s.kind(),
            Strategy::Fetch(s) => s.kind(),
        }
    }

    async fn load(&self, registry: &SectionRegistry) -> Result<SectionMap, LoadError> {
        match self {
            Strategy::Inline(s) => s.load(registry).await,
            Strategy::Fetch(s) => s.load(registry).await,
        }
    }
}
