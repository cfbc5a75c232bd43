//! Hamburger drawer for narrow viewports

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gradreport_core::config::LayoutConfig;
use gradreport_core::drawer::Drawer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::dom;

struct DrawerView {
    state: RefCell<Drawer>,
    hamburger: Element,
    sidebar: Element,
    overlay: Option<Element>,
    document: Document,
    open_class: String,
}

impl DrawerView {
    fn render(&self) {
        let open = self.state.borrow().is_open();
        dom::set_class(&self.sidebar, &self.open_class, open);
        if let Some(overlay) = &self.overlay {
            dom::set_class(overlay, &self.open_class, open);
        }
        dom::set_class(&self.hamburger, "active", open);
        dom::lock_body_scroll(&self.document, open);
    }

    fn update(&self, f: impl FnOnce(&mut Drawer) -> bool) {
        let changed = f(&mut self.state.borrow_mut());
        if changed {
            self.render();
        }
    }
}

pub fn init(window: &Window, document: &Document, config: &LayoutConfig) -> Result<(), JsValue> {
    let (Some(hamburger), Some(sidebar)) = (
        document.get_element_by_id("hamburger"),
        document.get_element_by_id("sidebar"),
    ) else {
        return Ok(());
    };

    let view = Rc::new(DrawerView {
        state: RefCell::new(Drawer::new(config.mobile_breakpoint_px)),
        hamburger,
        sidebar,
        overlay: document.get_element_by_id("sidebar-overlay"),
        document: document.clone(),
        open_class: config.open_class.clone(),
    });

    let handle = Rc::clone(&view);
    dom::listen(&view.hamburger, "click", move |_| {
        handle.update(|d| {
            d.toggle();
            true
        })
    })?;

    if let Some(overlay) = &view.overlay {
        let handle = Rc::clone(&view);
        dom::listen(overlay, "click", move |_| handle.update(Drawer::close))?;
    }

    for link in dom::query_all_in(&view.sidebar, ".sidebar-link")? {
        let handle = Rc::clone(&view);
        let win = window.clone();
        dom::listen(&link, "click", move |_| {
            let width = dom::viewport_width(&win);
            handle.update(|d| d.on_link_click(width))
        })?;
    }

    init_resize(window, view, config.resize_debounce_ms)
}

/// Debounced resize: only the last event in a burst reaches the drawer
fn init_resize(window: &Window, view: Rc<DrawerView>, debounce_ms: i32) -> Result<(), JsValue> {
    let win = window.clone();
    let settle = Closure::<dyn FnMut()>::new(move || {
        let width = dom::viewport_width(&win);
        view.update(|d| d.on_resize(width));
    });
    let settle_fn: js_sys::Function = settle.as_ref().unchecked_ref::<js_sys::Function>().clone();
    settle.forget();

    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let win = window.clone();
    dom::listen_passive(window, "resize", move |_| {
        if let Some(handle) = pending.take() {
            win.clear_timeout_with_handle(handle);
        }
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(&settle_fn, debounce_ms) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => tracing::warn!("resize timer failed: {:?}", e),
        }
    })
}
