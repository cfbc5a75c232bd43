//! Page start-up
//!
//! ```text
//! DOMContentLoaded ──► load config ──► select source ──► load + inject ──► init behaviours
//!                                       (inline|fetch)        │               ▲
//!                                                             └── on error ───┘ (logged)
//! ```

use gradreport_core::{
    load_and_inject, InjectionReport, Injector, LoadError, ReportConfig, SectionMap,
    SectionRegistry, SectionSource, Strategy,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::behaviors;
use crate::dom;
use crate::fetch::HttpFetcher;
use crate::host::DomHost;

/// Global a page may set to override the compiled-in configuration
pub const CONFIG_GLOBAL: &str = "__REPORT_CONFIG";

/// Run [`run`] once the document has been parsed
pub fn on_ready() -> Result<(), JsValue> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| {
            wasm_bindgen_futures::spawn_local(run());
        })?;
    } else {
        wasm_bindgen_futures::spawn_local(run());
    }
    Ok(())
}

pub async fn run() {
    let config = load_config();
    let registry = config.sections.registry().unwrap_or_else(|e| {
        tracing::warn!("Invalid section registry: {}, using defaults", e);
        SectionRegistry::default()
    });

    let document = match dom::document() {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("No document: {:?}", e);
            return;
        }
    };

    let embedded = embedded_sections(&config.sections.inline_global);
    let source = Strategy::select(embedded, HttpFetcher::default(), &config.sections.fetch_path);
    let injector = Injector::new(&registry, &config.sections.placeholder_prefix);
    let mut host = DomHost::new(document);

    tracing::info!(source = source.kind().as_str(), "loading report sections");

    let on_complete = |report: &InjectionReport| {
        if !report.missing_entry.is_empty() {
            tracing::debug!("sections without html: {:?}", report.missing_entry);
        }
        behaviors::init_all(&config);
        call_init_hook(&config.sections.init_hook);
    };

    if let Err(e) = load_and_inject(&source, &injector, &mut host, on_complete).await {
        tracing::error!("[loader] fetch failed: {}", e);
        behaviors::init_all(&config);
    }
}

fn load_config() -> ReportConfig {
    let defaults = ReportConfig::load_or_default();

    let Some(value) = dom::global(CONFIG_GLOBAL) else {
        return defaults;
    };

    match serde_wasm_bindgen::from_value::<ReportConfig>(value) {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", CONFIG_GLOBAL, e);
                defaults
            }
        },
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", CONFIG_GLOBAL, e);
            defaults
        }
    }
}

/// The embedded name -> html map, if the page ships one.
///
/// Non-string entries are skipped; a global that is not an object is
/// treated as absent so the fetch path still runs.
fn embedded_sections(global: &str) -> Option<SectionMap> {
    let value = dom::global(global)?;
    let Some(object) = value.dyn_ref::<js_sys::Object>() else {
        let e = LoadError::Embedded(format!("{} is not an object", global));
        tracing::warn!("{}", e);
        return None;
    };

    let mut map = SectionMap::new();
    for entry in js_sys::Object::entries(object).iter() {
        let pair: js_sys::Array = entry.unchecked_into();
        match (pair.get(0).as_string(), pair.get(1).as_string()) {
            (Some(name), Some(html)) => {
                map.insert(name, html);
            }
            (name, _) => tracing::warn!("skipping non-string embedded section {:?}", name),
        }
    }
    Some(map)
}

/// Invoke the optional global re-initialisation hook
fn call_init_hook(name: &str) {
    let Some(hook) = dom::global(name) else {
        return;
    };
    match hook.dyn_ref::<js_sys::Function>() {
        Some(f) => {
            if let Err(e) = f.call0(&JsValue::NULL) {
                tracing::warn!("{} threw: {:?}", name, e);
            }
        }
        None => tracing::debug!("{} is not a function", name),
    }
}
