//! Widgets shared by the hero search and the palette.

pub mod list;
pub mod phase;
pub mod rows;
pub mod spinner;

pub use list::{ListHitbox, ResultList, hit_test};
pub use phase::{phase_chip, phase_color};
pub use rows::{ListLine, RowLabels, build_lines, item_span};
pub use spinner::render_spinner;
