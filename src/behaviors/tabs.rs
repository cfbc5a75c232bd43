//! Tab bars

use std::cell::RefCell;
use std::rc::Rc;

use gradreport_core::tabs::{PaneContainer, TabGroup};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom;

struct Tabs {
    group: RefCell<TabGroup>,
    buttons: Vec<Element>,
    panes: Vec<Element>,
}

impl Tabs {
    fn render(&self) {
        let group = self.group.borrow();
        for (i, button) in self.buttons.iter().enumerate() {
            dom::set_class(button, "active", group.is_button_active(i));
        }
        for (i, pane) in self.panes.iter().enumerate() {
            dom::set_class(pane, "active", group.is_pane_active(i));
        }
    }

    fn click(&self, button: usize) {
        self.group.borrow_mut().activate(button);
        self.render();
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    for bar in dom::query_all(document, ".tab-bar")? {
        init_bar(document, &bar)?;
    }
    Ok(())
}

fn init_bar(document: &Document, bar: &Element) -> Result<(), JsValue> {
    let buttons = dom::query_all_in(bar, ".tab-btn")?;

    let panes = match PaneContainer::from_target(dom::data(bar, "target")) {
        PaneContainer::ById(id) => match document.get_element_by_id(&id) {
            Some(container) => dom::query_all_in(&container, ".tab-pane")?,
            None => {
                tracing::debug!("tab container #{} not found", id);
                return Ok(());
            }
        },
        PaneContainer::NearestSection => match bar.closest(".section")? {
            Some(section) => dom::query_all_in(&section, ".tab-pane")?,
            None => dom::query_all(document, ".tab-pane")?,
        },
    };

    let Some(group) = TabGroup::new(
        buttons.iter().map(|b| dom::data(b, "pane")).collect(),
        panes.iter().map(|p| p.id()).collect(),
    ) else {
        return Ok(());
    };

    let tabs = Rc::new(Tabs {
        group: RefCell::new(group),
        buttons,
        panes,
    });
    tabs.render();

    for (i, button) in tabs.buttons.iter().enumerate() {
        let handle = Rc::clone(&tabs);
        dom::listen(button, "click", move |_| handle.click(i))?;
    }
    Ok(())
}
