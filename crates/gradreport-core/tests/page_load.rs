//! End-to-end page load: config -> source selection -> injection -> init

use std::cell::Cell;
use std::collections::HashMap;

use async_trait::async_trait;
use gradreport_core::{
    load_and_inject, FetchResponse, Fetcher, Injector, LoadError, PlaceholderHost, ReportConfig,
    SectionMap, SectionSource, SourceKind, Strategy,
};

/// Serves `<section id="name">` for every path except the listed failures
struct StaticServer {
    fail: HashMap<String, u16>,
    hits: Cell<usize>,
}

impl StaticServer {
    fn healthy() -> Self {
        Self {
            fail: HashMap::new(),
            hits: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl Fetcher for StaticServer {
    async fn get_text(&self, path: &str) -> Result<FetchResponse, String> {
        self.hits.set(self.hits.get() + 1);
        if let Some(&status) = self.fail.get(path) {
            return Ok(FetchResponse {
                status,
                body: "Not Found".to_string(),
            });
        }
        let name = path
            .trim_start_matches("sections/")
            .trim_end_matches(".html");
        Ok(FetchResponse {
            status: 200,
            body: format!("<section id=\"{}\"></section>", name),
        })
    }
}

/// Placeholder ids still present in the page
#[derive(Default)]
struct Page {
    placeholders: Vec<String>,
    content: Vec<String>,
}

impl Page {
    fn for_config(config: &ReportConfig) -> Self {
        let placeholders = config
            .sections
            .names
            .iter()
            .map(|n| format!("{}{}", config.sections.placeholder_prefix, n))
            .collect();
        Self {
            placeholders,
            content: Vec::new(),
        }
    }
}

impl PlaceholderHost for Page {
    fn replace_placeholder(&mut self, id: &str, html: &str) -> bool {
        match self.placeholders.iter().position(|p| p == id) {
            Some(i) => {
                self.placeholders.remove(i);
                self.content.push(html.to_string());
                true
            }
            None => false,
        }
    }
}

#[tokio::test]
async fn test_fetch_path_loads_every_section_in_order() {
    let config = ReportConfig::load_defaults().unwrap();
    let registry = config.sections.registry().unwrap();
    let injector = Injector::new(&registry, &config.sections.placeholder_prefix);
    let source = Strategy::select(None, StaticServer::healthy(), &config.sections.fetch_path);
    assert_eq!(source.kind(), SourceKind::Fetch);

    let mut page = Page::for_config(&config);
    let mut initialised = 0;
    let report = load_and_inject(&source, &injector, &mut page, |_| initialised += 1)
        .await
        .unwrap();

    assert_eq!(initialised, 1);
    assert!(report.is_complete());
    assert!(page.placeholders.is_empty());
    assert_eq!(page.content.first().unwrap(), "<section id=\"s1-overview\"></section>");
    assert_eq!(page.content.last().unwrap(), "<section id=\"s8-corr\"></section>");
}

#[tokio::test]
async fn test_one_failed_section_blocks_the_stage() {
    let config = ReportConfig::load_defaults().unwrap();
    let registry = config.sections.registry().unwrap();
    let injector = Injector::new(&registry, &config.sections.placeholder_prefix);

    let mut server = StaticServer::healthy();
    server.fail.insert("sections/s6-cluster.html".to_string(), 404);
    let source = Strategy::select(None, server, &config.sections.fetch_path);

    let mut page = Page::for_config(&config);
    let err = load_and_inject(&source, &injector, &mut page, |_| {})
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LoadError::Status {
            section: "s6-cluster".to_string(),
            status: 404
        }
    );
    assert_eq!(page.placeholders.len(), 8);
    assert!(page.content.is_empty());
}

#[tokio::test]
async fn test_embedded_map_skips_network() {
    let config = ReportConfig::load_defaults().unwrap();
    let registry = config.sections.registry().unwrap();
    let injector = Injector::new(&registry, &config.sections.placeholder_prefix);

    let mut embedded = SectionMap::new();
    embedded.insert("s1-overview".to_string(), "<section>1</section>".to_string());
    embedded.insert("s3-theory".to_string(), "<section>3</section>".to_string());

    let server = StaticServer::healthy();
    let source = Strategy::select(Some(embedded), server, &config.sections.fetch_path);
    assert_eq!(source.kind(), SourceKind::Inline);

    let mut page = Page::for_config(&config);
    let report = load_and_inject(&source, &injector, &mut page, |_| {})
        .await
        .unwrap();

    assert_eq!(report.injected, vec!["s1-overview", "s3-theory"]);
    assert_eq!(report.missing_entry.len(), 6);
    let remaining = &page.placeholders;
    assert!(remaining.contains(&"section-s2-pipeline".to_string()));
    assert!(!remaining.contains(&"section-s1-overview".to_string()));
}
