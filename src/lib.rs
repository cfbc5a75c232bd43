//! Graduation Score Report - browser runtime
//!
//! Assembles the single-page report from its section partials and wires the
//! page behaviours (sidebar, tabs, lightbox, scroll spy, counters, comment
//! persistence). The DOM-free models live in `gradreport-core`; this crate
//! binds them to the document through web-sys.

pub mod behaviors;
pub mod boot;
pub mod dom;
pub mod fetch;
pub mod host;
pub mod storage;

pub use fetch::HttpFetcher;
pub use host::DomHost;

use wasm_bindgen::prelude::*;
use web_sys::ScrollLogicalPosition;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("gradreport loaded");

    if let Err(e) = boot::on_ready() {
        tracing::error!("start-up failed: {:?}", e);
    }
}

/// Smooth-scroll to the element with `id`. Unknown ids are ignored.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) {
    let Ok(document) = dom::document() else {
        return;
    };
    if let Some(section) = document.get_element_by_id(id) {
        dom::scroll_into_view(&section, ScrollLogicalPosition::Start);
    }
}
