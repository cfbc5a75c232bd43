//! Section injection
//!
//! Replaces `section-<name>` placeholders with loaded markup, in registry
//! order, then hands control to the completion callback. The callback is a
//! parameter rather than a well-known global, so whoever starts the load
//! decides what runs next.

use crate::error::LoadError;
use crate::registry::{placeholder_id, SectionRegistry};
use crate::source::{SectionMap, SectionSource};

/// Document side of injection
pub trait PlaceholderHost {
    /// Replace the element with id `id` (including its own tag) by `html`.
    /// Returns false when no such element exists.
    fn replace_placeholder(&mut self, id: &str, html: &str) -> bool;
}

/// Outcome of one injection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectionReport {
    pub injected: Vec<String>,
    /// Registry names the source had no html for; placeholder left visible
    pub missing_entry: Vec<String>,
    /// Html was available but the page has no placeholder for it
    pub missing_placeholder: Vec<String>,
}

impl InjectionReport {
    pub fn is_complete(&self) -> bool {
        self.missing_entry.is_empty() && self.missing_placeholder.is_empty()
    }
}

pub struct Injector<'a> {
    registry: &'a SectionRegistry,
    placeholder_prefix: &'a str,
}

impl<'a> Injector<'a> {
    pub fn new(registry: &'a SectionRegistry, placeholder_prefix: &'a str) -> Self {
        Self {
            registry,
            placeholder_prefix,
        }
    }

    /// Inject every available section, then call `on_complete` once
    pub fn inject<H, C>(&self, map: &SectionMap, host: &mut H, on_complete: C) -> InjectionReport
    where
        H: PlaceholderHost + ?Sized,
        C: FnOnce(&InjectionReport),
    {
        let mut report = InjectionReport::default();

        for name in self.registry.names() {
            let Some(html) = map.get(name) else {
                report.missing_entry.push(name.to_string());
                continue;
            };

            let id = placeholder_id(self.placeholder_prefix, name);
            if host.replace_placeholder(&id, html) {
                report.injected.push(name.to_string());
            } else {
                tracing::debug!(section = name, "placeholder #{} not found", id);
                report.missing_placeholder.push(name.to_string());
            }
        }

        tracing::info!(
            injected = report.injected.len(),
            missing = report.missing_entry.len(),
            "sections injected"
        );
        on_complete(&report);
        report
    }
}

/// Load every section from `source` and inject it.
///
/// A load failure aborts before any placeholder is touched and the callback
/// is not invoked.
pub async fn load_and_inject<S, H, C>(
    source: &S,
    injector: &Injector<'_>,
    host: &mut H,
    on_complete: C,
) -> Result<InjectionReport, LoadError>
where
    S: SectionSource + ?Sized,
    H: PlaceholderHost + ?Sized,
    C: FnOnce(&InjectionReport),
{
    tracing::debug!(source = source.kind().as_str(), "loading sections");
    let map = source.load(injector.registry).await?;
    Ok(injector.inject(&map, host, on_complete))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::MockFetcher;
    use crate::source::{FetchSource, InlineSource};
    use std::collections::HashMap;

    /// In-memory document: element id -> outer html
    #[derive(Default)]
    struct MemoryHost {
        elements: HashMap<String, String>,
    }

    impl MemoryHost {
        fn with_placeholders(names: &[&str]) -> Self {
            let elements = names
                .iter()
                .map(|n| {
                    let id = format!("section-{}", n);
                    let html = format!("<div id=\"{}\"></div>", id);
                    (id, html)
                })
                .collect();
            Self { elements }
        }
    }

    impl PlaceholderHost for MemoryHost {
        fn replace_placeholder(&mut self, id: &str, html: &str) -> bool {
            match self.elements.remove(id) {
                Some(_) => {
                    self.elements.insert(format!("injected:{}", id), html.to_string());
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn test_present_names_replaced_absent_untouched() {
        let registry = SectionRegistry::new(["a", "b", "c"]).unwrap();
        let injector = Injector::new(&registry, "section-");
        let mut host = MemoryHost::with_placeholders(&["a", "b", "c"]);

        let mut map = SectionMap::new();
        map.insert("a".to_string(), "<section>A</section>".to_string());
        map.insert("c".to_string(), "<section>C</section>".to_string());

        let report = injector.inject(&map, &mut host, |_| {});

        assert!(!host.elements.contains_key("section-a"));
        assert!(!host.elements.contains_key("section-c"));
        assert_eq!(host.elements["section-b"], "<div id=\"section-b\"></div>");
        assert_eq!(report.injected, vec!["a", "c"]);
        assert_eq!(report.missing_entry, vec!["b"]);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_missing_placeholder_reported() {
        let registry = SectionRegistry::new(["a"]).unwrap();
        let injector = Injector::new(&registry, "section-");
        let mut host = MemoryHost::default();
        let mut map = SectionMap::new();
        map.insert("a".to_string(), "<p/>".to_string());

        let report = injector.inject(&map, &mut host, |_| {});
        assert_eq!(report.missing_placeholder, vec!["a"]);
    }

    #[test]
    fn test_callback_runs_once_after_injection() {
        let registry = SectionRegistry::new(["a"]).unwrap();
        let injector = Injector::new(&registry, "section-");
        let mut host = MemoryHost::with_placeholders(&["a"]);
        let mut map = SectionMap::new();
        map.insert("a".to_string(), "<p/>".to_string());

        let mut calls = Vec::new();
        injector.inject(&map, &mut host, |report| calls.push(report.injected.clone()));
        assert_eq!(calls, vec![vec!["a".to_string()]]);
    }

    #[tokio::test]
    async fn test_failed_fetch_injects_nothing() {
        let registry = SectionRegistry::new(["a", "b"]).unwrap();
        let injector = Injector::new(&registry, "section-");
        let mut host = MemoryHost::with_placeholders(&["a", "b"]);
        let fetcher = MockFetcher::default()
            .ok("sections/a.html", "<p>a</p>")
            .status("sections/b.html", 500);
        let source = FetchSource::new(fetcher, "sections/{name}.html");

        let mut called = false;
        let result = load_and_inject(&source, &injector, &mut host, |_| called = true).await;

        assert!(result.is_err());
        assert!(!called);
        assert!(host.elements.contains_key("section-a"));
        assert!(host.elements.contains_key("section-b"));
    }

    #[tokio::test]
    async fn test_inline_load_and_inject() {
        let registry = SectionRegistry::new(["a", "b"]).unwrap();
        let injector = Injector::new(&registry, "section-");
        let mut host = MemoryHost::with_placeholders(&["a", "b"]);
        let mut embedded = SectionMap::new();
        embedded.insert("b".to_string(), "<p>b</p>".to_string());

        let report = load_and_inject(&InlineSource::new(embedded), &injector, &mut host, |_| {})
            .await
            .unwrap();

        assert_eq!(report.injected, vec!["b"]);
        assert!(host.elements.contains_key("section-a"));
        assert_eq!(host.elements["injected:section-b"], "<p>b</p>");
    }
}
