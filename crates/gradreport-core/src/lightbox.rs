//! Image lightbox state machine
//!
//! ```text
//!            ImageClicked(src)
//!   CLOSED ─────────────────────► OPEN(src)
//!      ▲                              │
//!      └──── Backdrop / Close / Esc ──┘
//! ```

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        src: String,
        alt: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    /// A designated page image was clicked
    ImageClicked { src: String, alt: String },
    /// Click landed on the overlay itself
    BackdropClicked,
    /// Click inside the overlay but off the backdrop, e.g. on the enlarged image
    OverlayContentClicked,
    CloseClicked,
    Key(String),
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Page scroll is suppressed while open
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Apply an event. Returns true when the state changed.
    pub fn handle(&mut self, event: LightboxEvent) -> bool {
        let next = match (&self.state, event) {
            (_, LightboxEvent::ImageClicked { src, alt }) => LightboxState::Open { src, alt },
            (LightboxState::Open { .. }, LightboxEvent::BackdropClicked)
            | (LightboxState::Open { .. }, LightboxEvent::CloseClicked) => LightboxState::Closed,
            (LightboxState::Open { .. }, LightboxEvent::Key(key)) if key == "Escape" => {
                LightboxState::Closed
            }
            _ => return false,
        };

        let changed = next != self.state;
        self.state = next;
        changed
    }
}
