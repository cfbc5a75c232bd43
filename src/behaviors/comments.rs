//! Editable comment boxes

use std::cell::RefCell;
use std::rc::Rc;

use gradreport_core::comments::{CommentPlaceholder, CommentStore};
use gradreport_core::config::CommentsConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom;
use crate::storage::LocalStore;

/// Restore saved text into `.comment-box.editable[data-key]` and save on
/// every edit
pub fn init_persistence(document: &Document, config: &CommentsConfig) -> Result<(), JsValue> {
    let boxes = dom::query_all(document, ".comment-box.editable[data-key]")?;
    if boxes.is_empty() {
        return Ok(());
    }

    let store = Rc::new(RefCell::new(CommentStore::new(
        LocalStore::open(),
        config.key_prefix.clone(),
    )));

    for comment in boxes {
        let Some(region) = dom::data(&comment, "key") else {
            continue;
        };
        if let Some(saved) = store.borrow().restore(&region) {
            comment.set_text_content(Some(&saved));
        }

        let store = Rc::clone(&store);
        let source = comment.clone();
        dom::listen(&comment, "input", move |_| {
            let text = source.text_content().unwrap_or_default();
            if let Err(e) = store.borrow_mut().save(&region, &text) {
                tracing::warn!("comment {} not saved: {}", region, e);
            }
        })?;
    }
    Ok(())
}

/// Dimmed hint text in empty `.comment-box[data-placeholder]` elements
pub fn init_placeholders(document: &Document, config: &CommentsConfig) -> Result<(), JsValue> {
    for comment in dom::query_all(document, ".comment-box[data-placeholder]")? {
        let hint = Rc::new(CommentPlaceholder::new(
            dom::data(&comment, "placeholder").unwrap_or_default(),
        ));
        let dim = config.placeholder_opacity.clone();

        if let Some(text) = hint.on_init(&comment.text_content().unwrap_or_default()) {
            comment.set_text_content(Some(text));
            dom::set_style(&comment, "opacity", &dim);
        }

        let focus_hint = Rc::clone(&hint);
        let target = comment.clone();
        dom::listen(&comment, "focus", move |_| {
            let content = target.text_content().unwrap_or_default();
            if let Some(text) = focus_hint.on_focus(&content) {
                target.set_text_content(Some(text));
                dom::set_style(&target, "opacity", "1");
            }
        })?;

        let target = comment.clone();
        dom::listen(&comment, "blur", move |_| {
            let content = target.text_content().unwrap_or_default();
            if let Some(text) = hint.on_blur(&content) {
                target.set_text_content(Some(text));
                dom::set_style(&target, "opacity", &dim);
            }
        })?;
    }
    Ok(())
}
