//! Incremental search for a community directory portal, in the terminal.
//!
//! [`search`] holds the engine (debounce, request sequencing, result
//! flattening) and [`ui`] hosts it as an inline hero search plus a modal
//! command palette. Backends and the wire model live in
//! [`portal_search_api`].

pub mod app_dirs;
pub mod logging;
pub mod outcome;
pub mod search;
pub mod ui;

pub use outcome::{NavigationRequest, SearchOutcome};
pub use portal_search_api as api;
pub use ui::{App, PortalSearch, SearchOptions, SearchTrigger, UiConfig, run};
pub use ui::style::{Theme, default_theme};
