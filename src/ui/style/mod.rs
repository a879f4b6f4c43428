//! Visual styling.
//!
//! Themes are plain colour schemes; widgets read named styles from them
//! rather than hard-coding colours.

mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, definitions, names};
