//! Image lightbox

use std::cell::RefCell;
use std::rc::Rc;

use gradreport_core::lightbox::{Lightbox, LightboxEvent, LightboxState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent};

use crate::dom;

/// Images that open in the lightbox
const IMAGE_SELECTOR: &str = ".chart-card-body img, .panel-img-wrap img";

struct LightboxView {
    state: RefCell<Lightbox>,
    overlay: Element,
    image: HtmlImageElement,
    document: Document,
    open_class: String,
}

impl LightboxView {
    fn dispatch(&self, event: LightboxEvent) {
        if self.state.borrow_mut().handle(event) {
            self.render();
        }
    }

    fn render(&self) {
        let state = self.state.borrow();
        if let LightboxState::Open { src, alt } = state.state() {
            self.image.set_src(src);
            self.image.set_alt(alt);
        }
        dom::set_class(&self.overlay, &self.open_class, state.is_open());
        dom::lock_body_scroll(&self.document, state.scroll_locked());
    }
}

pub fn init(document: &Document, open_class: &str) -> Result<(), JsValue> {
    let overlay = document.get_element_by_id("lightbox");
    let image = document
        .get_element_by_id("lightbox-img")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
    let (Some(overlay), Some(image)) = (overlay, image) else {
        tracing::debug!("no lightbox on page");
        return Ok(());
    };

    let view = Rc::new(LightboxView {
        state: RefCell::new(Lightbox::new()),
        overlay,
        image,
        document: document.clone(),
        open_class: open_class.to_string(),
    });

    for el in dom::query_all(document, IMAGE_SELECTOR)? {
        let Ok(img) = el.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        let _ = img.style().set_property("cursor", "pointer");

        let handle = Rc::clone(&view);
        let source = img.clone();
        dom::listen(&img, "click", move |_| {
            handle.dispatch(LightboxEvent::ImageClicked {
                src: source.src(),
                alt: source.alt(),
            })
        })?;
    }

    let handle = Rc::clone(&view);
    dom::listen(&view.overlay, "click", move |event| {
        let on_backdrop = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .map(|t| dom::same(&t, &handle.overlay))
            .unwrap_or(false);
        handle.dispatch(if on_backdrop {
            LightboxEvent::BackdropClicked
        } else {
            LightboxEvent::OverlayContentClicked
        });
    })?;

    if let Some(close) = document.get_element_by_id("lightbox-close") {
        let handle = Rc::clone(&view);
        dom::listen(&close, "click", move |_| {
            handle.dispatch(LightboxEvent::CloseClicked)
        })?;
    }

    let handle = Rc::clone(&view);
    dom::listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) {
            handle.dispatch(LightboxEvent::Key(key));
        }
    })?;

    Ok(())
}
