//! Live-document placeholder host

use gradreport_core::PlaceholderHost;
use web_sys::Document;

pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PlaceholderHost for DomHost {
    fn replace_placeholder(&mut self, id: &str, html: &str) -> bool {
        match self.document.get_element_by_id(id) {
            Some(placeholder) => {
                placeholder.set_outer_html(html);
                true
            }
            None => false,
        }
    }
}
