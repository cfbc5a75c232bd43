//! Scroll-position tracking: scroll spy, read progress, back-to-top

/// Last anchor (document order) whose top offset is at or above
/// `scroll_y + threshold`.
pub fn last_reached(offsets: &[f64], scroll_y: f64, threshold: f64) -> Option<usize> {
    let line = scroll_y + threshold;
    offsets.iter().rposition(|&top| top <= line)
}

/// Like [`last_reached`], but falls back to the first anchor when none
/// has been reached yet. `None` only for an empty anchor list.
pub fn active_anchor(offsets: &[f64], scroll_y: f64, threshold: f64) -> Option<usize> {
    if offsets.is_empty() {
        return None;
    }
    Some(last_reached(offsets, scroll_y, threshold).unwrap_or(0))
}

/// Remembers the last active anchor so repeated scroll events at the same
/// position do no DOM work.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    threshold: f64,
    last: Option<usize>,
}

impl ScrollSpy {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last: None,
        }
    }

    /// Returns the new active anchor, or `None` if it did not change
    pub fn update(&mut self, offsets: &[f64], scroll_y: f64) -> Option<usize> {
        let current = active_anchor(offsets, scroll_y, self.threshold)?;
        if self.last == Some(current) {
            return None;
        }
        self.last = Some(current);
        Some(current)
    }

    pub fn current(&self) -> Option<usize> {
        self.last
    }
}

/// Read progress as a percentage in `0..=100`
pub fn read_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// CSS width value for a percentage
pub fn percent_width(pct: f64) -> String {
    format!("{}%", pct)
}

#[derive(Debug, Clone, Copy)]
pub struct BackToTop {
    threshold: f64,
}

impl BackToTop {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spy_picks_last_anchor_above_line() {
        assert_eq!(active_anchor(&[0.0, 500.0, 1200.0], 600.0, 100.0), Some(1));
        // boundary: exactly on the line counts
        assert_eq!(active_anchor(&[0.0, 500.0, 1200.0], 1100.0, 100.0), Some(2));
    }

    #[test]
    fn test_spy_falls_back_to_first() {
        assert_eq!(active_anchor(&[300.0, 900.0], 0.0, 100.0), Some(0));
        assert_eq!(last_reached(&[300.0, 900.0], 0.0, 100.0), None);
        assert_eq!(active_anchor(&[], 0.0, 100.0), None);
    }

    #[test]
    fn test_spy_reports_only_changes() {
        let mut spy = ScrollSpy::new(100.0);
        let offsets = [0.0, 500.0, 1200.0];
        assert_eq!(spy.update(&offsets, 0.0), Some(0));
        assert_eq!(spy.update(&offsets, 50.0), None);
        assert_eq!(spy.update(&offsets, 600.0), Some(1));
        assert_eq!(spy.update(&offsets, 650.0), None);
        assert_eq!(spy.current(), Some(1));
    }

    #[test]
    fn test_read_progress_bounds() {
        assert_eq!(read_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(read_progress(2000.0, 3000.0, 1000.0), 100.0);
        assert_eq!(read_progress(1000.0, 3000.0, 1000.0), 50.0);
        // overscroll (elastic scrolling) never exceeds 100
        assert_eq!(read_progress(2300.0, 3000.0, 1000.0), 100.0);
        assert_eq!(read_progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_read_progress_unscrollable_page() {
        assert_eq!(read_progress(0.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn test_back_to_top_threshold() {
        let btn = BackToTop::new(400.0);
        assert!(!btn.visible(400.0));
        assert!(btn.visible(401.0));

        let alt = BackToTop::new(300.0);
        assert!(alt.visible(350.0));
    }

    #[test]
    fn test_percent_width() {
        assert_eq!(percent_width(50.0), "50%");
        assert_eq!(percent_width(12.5), "12.5%");
    }
}
