//! Interactive terminal UI for the portal search.
//!
//! [`PortalSearch`] is the public builder. The landing page ([`App`]) hosts
//! the inline hero search and the modal palette, whose lifecycle lives in
//! [`overlay`]. Keyboard traversal of results is in [`navigation`].

mod app;
mod builder;
pub mod components;
mod config;
pub mod hero;
pub mod input;
pub mod navigation;
pub mod overlay;
pub mod palette;
mod render;
mod runtime;
mod status;
pub mod style;
pub mod trigger;

pub use app::{App, Focus, SearchOptions};
pub use builder::PortalSearch;
pub use config::UiConfig;
pub use runtime::run;
pub use status::SearchStatus;
pub use trigger::SearchTrigger;
