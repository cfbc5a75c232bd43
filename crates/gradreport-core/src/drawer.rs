//! Mobile sidebar drawer (hamburger menu)

#[derive(Debug, Clone)]
pub struct Drawer {
    open: bool,
    breakpoint: f64,
}

impl Drawer {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Viewports at or below the breakpoint use the drawer layout
    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= self.breakpoint
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns true if the drawer was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Following a nav link closes the drawer on mobile layouts
    pub fn on_link_click(&mut self, viewport_width: f64) -> bool {
        self.is_mobile(viewport_width) && self.close()
    }

    /// Growing past the breakpoint closes the drawer
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        !self.is_mobile(viewport_width) && self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut drawer = Drawer::new(768.0);
        drawer.toggle();
        assert!(drawer.is_open());
        assert!(drawer.close());
        assert!(!drawer.close());
    }

    #[test]
    fn test_link_click_closes_only_on_mobile() {
        let mut drawer = Drawer::new(768.0);
        drawer.toggle();
        assert!(!drawer.on_link_click(1024.0));
        assert!(drawer.is_open());
        assert!(drawer.on_link_click(768.0));
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_resize_past_breakpoint_closes() {
        let mut drawer = Drawer::new(768.0);
        drawer.toggle();
        assert!(!drawer.on_resize(600.0));
        assert!(drawer.is_open());
        assert!(drawer.on_resize(1200.0));
        assert!(!drawer.is_open());
    }
}
