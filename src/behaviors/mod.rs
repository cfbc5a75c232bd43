//! Page behaviour modules
//!
//! Each module queries the DOM once, keeps the element handles it needs and
//! attaches its listeners. Modules are independent: a failing setup is
//! logged and the rest still initialise. The sidebar handle is the only
//! state shared between modules and is passed to scroll spy explicitly.

pub mod animate;
pub mod comments;
pub mod drawer;
pub mod lightbox;
pub mod scroll;
pub mod sidebar;
pub mod tabs;

use gradreport_core::ReportConfig;
use wasm_bindgen::JsValue;

use crate::dom;

/// Initialise every behaviour against the current document
pub fn init_all(config: &ReportConfig) {
    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(w), Ok(d)) => (w, d),
        _ => {
            tracing::error!("behaviours need a window and a document");
            return;
        }
    };

    let sidebar = setup("sidebar", || sidebar::init(&document, &config.sidebar)).flatten();
    setup("tabs", || tabs::init(&document));
    setup("lightbox", || {
        lightbox::init(&document, &config.layout.open_class)
    });
    setup("scroll spy", || {
        scroll::init_spy(&window, &document, sidebar.clone(), &config.scroll)
    });
    setup("nav menu", || {
        scroll::init_nav_spy(&window, &document, &config.scroll)
    });
    setup("read progress", || scroll::init_progress(&window, &document));
    setup("back to top", || {
        scroll::init_back_to_top(&window, &document, &config.scroll)
    });
    setup("drawer", || drawer::init(&window, &document, &config.layout));
    setup("comments", || comments::init_persistence(&document, &config.comments));
    setup("comment placeholders", || {
        comments::init_placeholders(&document, &config.comments)
    });
    setup("counters", || {
        animate::init_counters(&window, &document, &config.animation)
    });
    setup("bars", || animate::init_bars(&document, &config.animation));
    setup("chart tags", || animate::init_chart_tags(&document, &config.tags));
    setup("reveal", || animate::init_reveal(&document, &config.animation));

    tracing::info!("page behaviours initialised");
}

fn setup<T>(name: &str, f: impl FnOnce() -> Result<T, JsValue>) -> Option<T> {
    match f() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("{} setup failed: {:?}", name, e);
            None
        }
    }
}
