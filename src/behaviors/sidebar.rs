//! Sidebar: collapsible groups, active link, search filter

use std::cell::RefCell;
use std::rc::Rc;

use gradreport_core::config::SidebarConfig;
use gradreport_core::sidebar::{LinkSpec, SidebarModel};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, ScrollLogicalPosition};

use crate::dom;

pub struct Sidebar {
    model: RefCell<SidebarModel>,
    groups: Vec<Element>,
    links: Vec<Element>,
}

impl Sidebar {
    /// Push model state to the DOM
    fn render(&self) {
        let model = self.model.borrow();
        for (i, group) in self.groups.iter().enumerate() {
            dom::set_class(group, "open", model.is_open(i));
        }
        for (i, link) in self.links.iter().enumerate() {
            dom::set_class(link, "active", model.active() == Some(i));
            dom::set_class(link, "hidden", model.is_hidden(i));
        }
    }

    pub fn toggle_group(&self, group: usize) {
        self.model.borrow_mut().toggle_group(group);
        self.render();
    }

    /// Activate a link; `reveal` scrolls it into view inside the sidebar
    pub fn activate(&self, link: usize, reveal: bool) {
        let changed = self.model.borrow_mut().set_active(link);
        self.render();
        if changed && reveal {
            dom::scroll_into_view(&self.links[link], ScrollLogicalPosition::Nearest);
        }
    }

    /// Activate the link pointing at anchor `target`. When no link does,
    /// the active highlight is cleared and false is returned.
    pub fn activate_target(&self, target: &str) -> bool {
        let link = self.model.borrow().link_for_target(target);
        match link {
            Some(link) => {
                self.activate(link, true);
                true
            }
            None => {
                if self.model.borrow_mut().clear_active() {
                    self.render();
                }
                false
            }
        }
    }

    pub fn filter(&self, query: &str) {
        self.model.borrow_mut().filter(query);
        self.render();
    }

    pub fn has_targets(&self) -> bool {
        self.links.iter().any(|l| l.has_attribute("data-target"))
    }
}

pub fn init(document: &Document, config: &SidebarConfig) -> Result<Option<Rc<Sidebar>>, JsValue> {
    let groups = dom::query_all(document, ".sidebar-group")?;
    let links = dom::query_all(document, ".sidebar-link")?;
    if groups.is_empty() && links.is_empty() {
        tracing::debug!("no sidebar on page");
        return Ok(None);
    }

    let specs = links
        .iter()
        .map(|link| LinkSpec {
            text: link.text_content().unwrap_or_default(),
            target: dom::data(link, "target"),
            group: link
                .closest(".sidebar-group")
                .ok()
                .flatten()
                .and_then(|g| groups.iter().position(|candidate| dom::same(candidate, &g))),
        })
        .collect();
    let initially_active = links.iter().position(|l| l.class_list().contains("active"));

    let sidebar = Rc::new(Sidebar {
        model: RefCell::new(SidebarModel::new(
            groups.len(),
            specs,
            initially_active,
            config.exclusive_groups,
        )),
        groups,
        links,
    });
    sidebar.render();

    for (i, group) in sidebar.groups.iter().enumerate() {
        if let Some(label) = group.query_selector(".sidebar-group-label")? {
            let handle = Rc::clone(&sidebar);
            dom::listen(&label, "click", move |_| handle.toggle_group(i))?;
        }
    }

    for (i, link) in sidebar.links.iter().enumerate() {
        let handle = Rc::clone(&sidebar);
        dom::listen(link, "click", move |_| handle.activate(i, false))?;
    }

    if let Some(input) = document
        .get_element_by_id("sidebar-search")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        let handle = Rc::clone(&sidebar);
        let field = input.clone();
        dom::listen(&input, "input", move |_| handle.filter(&field.value()))?;
    }

    Ok(Some(sidebar))
}
