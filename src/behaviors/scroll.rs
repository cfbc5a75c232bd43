//! Scroll-driven behaviours: scroll spy, top-nav spy, read progress,
//! back-to-top

use std::cell::RefCell;
use std::rc::Rc;

use gradreport_core::config::ScrollConfig;
use gradreport_core::scroll::{last_reached, percent_width, read_progress, BackToTop, ScrollSpy};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use super::sidebar::Sidebar;
use crate::dom;

fn offsets(window: &Window, elements: &[Element]) -> Vec<f64> {
    elements
        .iter()
        .map(|el| dom::document_offset(window, el))
        .collect()
}

/// Highlight the sidebar link of the section currently in view
pub fn init_spy(
    window: &Window,
    document: &Document,
    sidebar: Option<Rc<Sidebar>>,
    config: &ScrollConfig,
) -> Result<(), JsValue> {
    let anchors = dom::query_all(document, ".section-anchor[id]")?;
    let Some(sidebar) = sidebar.filter(|s| s.has_targets()) else {
        return Ok(());
    };
    if anchors.is_empty() {
        return Ok(());
    }

    let spy = RefCell::new(ScrollSpy::new(config.spy_offset_px));
    let win = window.clone();
    let update = move || {
        let active = spy
            .borrow_mut()
            .update(&offsets(&win, &anchors), dom::scroll_y(&win));
        if let Some(index) = active {
            sidebar.activate_target(&anchors[index].id());
        }
    };

    update();
    dom::listen_passive(window, "scroll", move |_| update())?;
    Ok(())
}

/// Mark the `#nav-menu` link whose section was scrolled past last
pub fn init_nav_spy(
    window: &Window,
    document: &Document,
    config: &ScrollConfig,
) -> Result<(), JsValue> {
    let Some(menu) = document.get_element_by_id("nav-menu") else {
        return Ok(());
    };

    let mut links = Vec::new();
    let mut sections = Vec::new();
    for link in dom::query_all_in(&menu, "a")? {
        let section = link
            .get_attribute("href")
            .and_then(|href| href.strip_prefix('#').map(str::to_string))
            .and_then(|id| document.get_element_by_id(&id));
        if let Some(section) = section {
            links.push(link);
            sections.push(section);
        }
    }
    if links.is_empty() {
        return Ok(());
    }

    let threshold = config.spy_offset_px;
    let win = window.clone();
    let update = move || {
        let current = last_reached(&offsets(&win, &sections), dom::scroll_y(&win), threshold);
        for (i, link) in links.iter().enumerate() {
            dom::set_class(link, "active", current == Some(i));
        }
    };

    update();
    dom::listen_passive(window, "scroll", move |_| update())?;
    Ok(())
}

pub fn init_progress(window: &Window, document: &Document) -> Result<(), JsValue> {
    let (Some(bar), Some(root)) = (
        document.get_element_by_id("read-progress"),
        document.document_element(),
    ) else {
        return Ok(());
    };

    let update = move || {
        let pct = read_progress(
            root.scroll_top() as f64,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        dom::set_style(&bar, "width", &percent_width(pct));
    };

    update();
    dom::listen_passive(window, "scroll", move |_| update())?;
    Ok(())
}

pub fn init_back_to_top(
    window: &Window,
    document: &Document,
    config: &ScrollConfig,
) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id("back-to-top") else {
        return Ok(());
    };

    let rule = BackToTop::new(config.back_to_top_px);
    let btn = button.clone();
    let win = window.clone();
    dom::listen_passive(window, "scroll", move |_| {
        dom::set_class(&btn, "visible", rule.visible(dom::scroll_y(&win)));
    })?;

    let win = window.clone();
    dom::listen(&button, "click", move |_| dom::scroll_to_top(&win))?;
    Ok(())
}
