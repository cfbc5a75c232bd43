//! Sidebar navigation model
//!
//! Collapsible link groups, a single active link and a text filter.
//! Groups and links are addressed by their index in document order.

/// One navigation link as found in the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    /// Visible text, used by the filter
    pub text: String,
    /// Anchor id this link points at (`data-target`)
    pub target: Option<String>,
    /// Index of the enclosing group, if any
    pub group: Option<usize>,
}

#[derive(Debug, Clone)]
struct LinkState {
    spec: LinkSpec,
    lowercase: String,
    hidden: bool,
}

#[derive(Debug, Clone)]
pub struct SidebarModel {
    open: Vec<bool>,
    links: Vec<LinkState>,
    active: Option<usize>,
    exclusive: bool,
    /// Group state captured when a search starts, restored when it clears
    pre_filter: Option<Vec<bool>>,
}

impl SidebarModel {
    /// Build the model and apply default grouping: the group holding the
    /// initially active link is opened, otherwise the first group.
    pub fn new(
        group_count: usize,
        links: Vec<LinkSpec>,
        initially_active: Option<usize>,
        exclusive: bool,
    ) -> Self {
        let links: Vec<LinkState> = links
            .into_iter()
            .map(|spec| LinkState {
                lowercase: spec.text.to_lowercase(),
                spec,
                hidden: false,
            })
            .collect();
        let active = initially_active.filter(|&i| i < links.len());

        let mut model = Self {
            open: vec![false; group_count],
            links,
            active,
            exclusive,
            pre_filter: None,
        };

        let default_group = match active {
            Some(link) => model.links[link].spec.group,
            None => (group_count > 0).then_some(0),
        };
        if let Some(group) = default_group {
            model.set_open(group, true);
        }
        model
    }

    pub fn group_count(&self) -> usize {
        self.open.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_open(&self, group: usize) -> bool {
        self.open.get(group).copied().unwrap_or(false)
    }

    pub fn is_hidden(&self, link: usize) -> bool {
        self.links.get(link).map(|l| l.hidden).unwrap_or(false)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_filtering(&self) -> bool {
        self.pre_filter.is_some()
    }

    /// Flip a group open/closed
    pub fn toggle_group(&mut self, group: usize) {
        if group < self.open.len() {
            let next = !self.open[group];
            self.set_open(group, next);
        }
    }

    fn set_open(&mut self, group: usize, open: bool) {
        if group >= self.open.len() {
            return;
        }
        if open && self.exclusive {
            self.open.iter_mut().for_each(|o| *o = false);
        }
        self.open[group] = open;
    }

    /// Mark exactly one link active and expand its group.
    ///
    /// Returns true when the active link changed.
    pub fn set_active(&mut self, link: usize) -> bool {
        if link >= self.links.len() {
            return false;
        }
        if let Some(group) = self.links[link].spec.group {
            if !self.is_open(group) {
                self.set_open(group, true);
            }
        }
        let changed = self.active != Some(link);
        self.active = Some(link);
        changed
    }

    /// Leave no link active. Returns true when one was.
    pub fn clear_active(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// First link pointing at `target`
    pub fn link_for_target(&self, target: &str) -> Option<usize> {
        self.links
            .iter()
            .position(|l| l.spec.target.as_deref() == Some(target))
    }

    /// Case-insensitive substring filter on link text.
    ///
    /// A non-empty query hides non-matching links and opens every group.
    /// An empty query shows every link and restores the group state from
    /// before the search began.
    pub fn filter(&mut self, query: &str) {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            for link in &mut self.links {
                link.hidden = false;
            }
            if let Some(saved) = self.pre_filter.take() {
                self.open = saved;
            }
            return;
        }

        if self.pre_filter.is_none() {
            self.pre_filter = Some(self.open.clone());
        }
        for link in &mut self.links {
            link.hidden = !link.lowercase.contains(&query);
        }
        self.open.iter_mut().for_each(|o| *o = true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(text: &str, target: &str, group: usize) -> LinkSpec {
        LinkSpec {
            text: text.to_string(),
            target: Some(target.to_string()),
            group: Some(group),
        }
    }

    fn model(exclusive: bool) -> SidebarModel {
        SidebarModel::new(
            3,
            vec![
                link("Overview", "s1", 0),
                link("Math scores", "s4-math", 1),
                link("Literature", "s4-lit", 1),
                link("MATH vs physics", "s8-corr", 2),
            ],
            None,
            exclusive,
        )
    }

    #[test]
    fn test_default_opens_first_group() {
        let m = model(false);
        assert!(m.is_open(0));
        assert!(!m.is_open(1));
        assert!(!m.is_open(2));
    }

    #[test]
    fn test_default_opens_active_links_group() {
        let m = SidebarModel::new(
            2,
            vec![link("a", "a", 0), link("b", "b", 1)],
            Some(1),
            false,
        );
        assert!(!m.is_open(0));
        assert!(m.is_open(1));
        assert_eq!(m.active(), Some(1));
    }

    #[test]
    fn test_toggle_not_exclusive() {
        let mut m = model(false);
        m.toggle_group(1);
        assert!(m.is_open(0));
        assert!(m.is_open(1));
        m.toggle_group(0);
        assert!(!m.is_open(0));
    }

    #[test]
    fn test_toggle_exclusive() {
        let mut m = model(true);
        m.toggle_group(2);
        assert!(!m.is_open(0));
        assert!(m.is_open(2));
    }

    #[test]
    fn test_set_active_expands_group() {
        let mut m = model(false);
        assert!(m.set_active(2));
        assert_eq!(m.active(), Some(2));
        assert!(m.is_open(1));
        assert!(!m.set_active(2));
    }

    #[test]
    fn test_filter_math() {
        let mut m = model(false);
        m.filter("math");

        assert!(m.is_hidden(0));
        assert!(!m.is_hidden(1));
        assert!(m.is_hidden(2));
        assert!(!m.is_hidden(3));
        assert!((0..m.group_count()).all(|g| m.is_open(g)));
    }

    #[test]
    fn test_clearing_filter_restores_groups() {
        let mut m = model(false);
        m.filter("ma");
        m.filter("math");
        m.filter("   ");

        assert!((0..m.link_count()).all(|l| !m.is_hidden(l)));
        assert!(m.is_open(0));
        assert!(!m.is_open(1));
        assert!(!m.is_filtering());
    }

    #[test]
    fn test_clear_active() {
        let mut m = model(false);
        m.set_active(1);
        assert!(m.clear_active());
        assert_eq!(m.active(), None);
        assert!(!m.clear_active());
        // groups opened by the activation stay open
        assert!(m.is_open(1));
    }

    #[test]
    fn test_link_for_target() {
        let m = model(false);
        assert_eq!(m.link_for_target("s4-lit"), Some(2));
        assert_eq!(m.link_for_target("nope"), None);
    }
}
