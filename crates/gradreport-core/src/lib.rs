//! Graduation Score Analysis report - interactive layer core
//!
//! DOM-free models for everything the report page does on the client:
//! section loading and injection, sidebar navigation, tabs, the image
//! lightbox, scroll tracking, one-shot animations, chart tags and comment
//! persistence.
//!
//! This crate is WASM-safe and has no browser dependency. `gradreport-web`
//! binds these models to the DOM; tests run natively.
//!
//! ## Page load
//!
//! ```text
//! ┌──────────────┐ select ┌───────────────┐ map ┌──────────┐ callback ┌────────────┐
//! │ ReportConfig ├───────►│ Strategy      ├────►│ Injector ├─────────►│ behaviours │
//! └──────────────┘        │ (inline|fetch)│     └──────────┘          └────────────┘
//!                         └───────────────┘
//! ```

pub mod animation;
pub mod comments;
pub mod config;
pub mod drawer;
pub mod error;
pub mod inject;
pub mod lightbox;
pub mod registry;
pub mod scroll;
pub mod sidebar;
pub mod source;
pub mod tabs;
pub mod tags;

pub use config::{ReportConfig, DEFAULT_REPORT_CONFIG};
pub use error::{ConfigError, LoadError, ParseError, StorageError};
pub use inject::{load_and_inject, InjectionReport, Injector, PlaceholderHost};
pub use registry::{Section, SectionRegistry};
pub use source::{Fetcher, FetchResponse, SectionMap, SectionSource, SourceKind, Strategy};
