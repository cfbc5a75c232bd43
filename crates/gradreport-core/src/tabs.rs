//! Tab groups
//!
//! A bar of buttons, each addressing one pane in an associated container.
//! Exactly one button is active; the pane it addresses is the only active
//! pane.

/// Where a bar's panes live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneContainer {
    /// `data-target` on the bar names the container id
    ById(String),
    /// Nearest enclosing `.section`, else the whole document
    NearestSection,
}

impl PaneContainer {
    pub fn from_target(target: Option<String>) -> Self {
        match target {
            Some(id) if !id.is_empty() => PaneContainer::ById(id),
            _ => PaneContainer::NearestSection,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabGroup {
    /// Pane index per button: the first pane whose id equals `data-pane`,
    /// else the pane at the button's own index. `None` when neither exists.
    targets: Vec<Option<usize>>,
    pane_count: usize,
    active: usize,
}

impl TabGroup {
    /// Build a group with its first button active. `buttons` holds each
    /// button's `data-pane`, `panes` each pane's id in document order.
    /// Returns `None` for a bar without buttons.
    pub fn new(buttons: Vec<Option<String>>, panes: Vec<String>) -> Option<Self> {
        if buttons.is_empty() {
            return None;
        }
        let targets = buttons
            .iter()
            .enumerate()
            .map(|(i, pane)| match pane {
                Some(id) => panes.iter().position(|p| p == id),
                None => (i < panes.len()).then_some(i),
            })
            .collect();
        Some(Self {
            targets,
            pane_count: panes.len(),
            active: 0,
        })
    }

    pub fn active_button(&self) -> usize {
        self.active
    }

    pub fn button_count(&self) -> usize {
        self.targets.len()
    }

    pub fn pane_count(&self) -> usize {
        self.pane_count
    }

    /// Activate button `index`; out-of-range indices are ignored
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.targets.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Pane index addressed by `button`
    pub fn pane_for(&self, button: usize) -> Option<usize> {
        self.targets.get(button).copied().flatten()
    }

    pub fn active_pane(&self) -> Option<usize> {
        self.pane_for(self.active)
    }

    pub fn is_button_active(&self, button: usize) -> bool {
        button == self.active
    }

    pub fn is_pane_active(&self, pane: usize) -> bool {
        self.active_pane() == Some(pane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn group() -> TabGroup {
        TabGroup::new(
            vec![
                Some("p-dist".to_string()),
                Some("p-box".to_string()),
                Some("p-table".to_string()),
            ],
            ids(&["p-dist", "p-box", "p-table"]),
        )
        .unwrap()
    }

    fn active_panes(g: &TabGroup) -> usize {
        (0..g.pane_count()).filter(|&p| g.is_pane_active(p)).count()
    }

    #[test]
    fn test_first_pair_active_by_default() {
        let g = group();
        assert_eq!(g.active_button(), 0);
        assert!(g.is_pane_active(0));
        assert_eq!(active_panes(&g), 1);
    }

    #[test]
    fn test_exactly_one_active_after_clicks() {
        let mut g = group();
        for click in [2, 1, 1, 0, 2, 7] {
            g.activate(click);
            let buttons = (0..g.button_count())
                .filter(|&b| g.is_button_active(b))
                .count();
            assert_eq!(buttons, 1);
            assert_eq!(active_panes(&g), 1);
        }
        assert!(g.is_pane_active(2));
    }

    #[test]
    fn test_index_fallback_without_data_pane() {
        let mut g = TabGroup::new(vec![None, None], ids(&["first", "second"])).unwrap();
        g.activate(1);
        assert!(g.is_pane_active(1));
        assert!(!g.is_pane_active(0));
    }

    #[test]
    fn test_panes_without_ids_activate_one_at_a_time() {
        let mut g = TabGroup::new(vec![None, None, None], ids(&["", "", ""])).unwrap();
        assert_eq!(active_panes(&g), 1);

        g.activate(2);
        assert_eq!(active_panes(&g), 1);
        assert!(g.is_pane_active(2));
        assert!(!g.is_pane_active(0));
    }

    #[test]
    fn test_duplicate_pane_ids_activate_one_pane() {
        let mut g = TabGroup::new(vec![None, None], ids(&["p", "p"])).unwrap();
        assert_eq!(active_panes(&g), 1);
        g.activate(1);
        assert_eq!(active_panes(&g), 1);
        assert!(g.is_pane_active(1));

        // data-pane resolves to the first pane carrying that id
        let g = TabGroup::new(vec![Some("p".to_string())], ids(&["p", "p"])).unwrap();
        assert_eq!(g.active_pane(), Some(0));
        assert_eq!(active_panes(&g), 1);
    }

    #[test]
    fn test_unresolved_button_activates_no_pane() {
        let mut g = TabGroup::new(
            vec![Some("p-dist".to_string()), Some("missing".to_string()), None],
            ids(&["p-dist"]),
        )
        .unwrap();
        g.activate(1);
        assert_eq!(g.active_pane(), None);
        assert_eq!(active_panes(&g), 0);
        g.activate(2);
        assert_eq!(g.active_pane(), None);
    }

    #[test]
    fn test_empty_bar() {
        assert!(TabGroup::new(vec![], ids(&["p"])).is_none());
    }

    #[test]
    fn test_container_from_target() {
        assert_eq!(
            PaneContainer::from_target(Some("tab-group-1".to_string())),
            PaneContainer::ById("tab-group-1".to_string())
        );
        assert_eq!(
            PaneContainer::from_target(Some(String::new())),
            PaneContainer::NearestSection
        );
        assert_eq!(PaneContainer::from_target(None), PaneContainer::NearestSection);
    }
}
