use std::ops::Range;

/// Keys understood by the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
	Down,
	Up,
	Enter,
	Escape,
}

/// Effect of a [`NavKey`] on the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
	/// The active row changed.
	Moved,
	/// Nothing changed.
	Unchanged,
	/// Open the row at this flat index.
	Navigate(usize),
	/// End the session.
	Dismiss,
}

/// Active row over a flat result list of length `len`.
///
/// `None` means nothing is selected. The cursor is never left pointing past
/// the end of the list it was last moved over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationCursor {
	active: Option<usize>,
}

impl NavigationCursor {
	#[must_use]
	pub fn active(&self) -> Option<usize> {
		self.active
	}

	pub fn apply(&mut self, key: NavKey, len: usize) -> NavOutcome {
		match key {
			NavKey::Down => {
				let next = match self.active {
					_ if len == 0 => None,
					None => Some(0),
					Some(index) => Some((index + 1).min(len - 1)),
				};
				self.move_to(next)
			}
			NavKey::Up => {
				let next = match self.active {
					None | Some(0) => None,
					Some(index) => Some((index - 1).min(len.saturating_sub(1))),
				};
				let next = next.filter(|_| len > 0);
				self.move_to(next)
			}
			NavKey::Enter => match self.active {
				Some(index) if index < len => NavOutcome::Navigate(index),
				_ => NavOutcome::Unchanged,
			},
			NavKey::Escape => NavOutcome::Dismiss,
		}
	}

	/// Select the row under the pointer. Mouse and keyboard share one cursor.
	pub fn hover(&mut self, index: usize, len: usize) -> bool {
		if index >= len {
			return false;
		}
		self.move_to(Some(index)) == NavOutcome::Moved
	}

	/// Deselect; called whenever the underlying rows are replaced.
	pub fn reset(&mut self) {
		self.active = None;
	}

	fn move_to(&mut self, next: Option<usize>) -> NavOutcome {
		if next == self.active {
			NavOutcome::Unchanged
		} else {
			self.active = next;
			NavOutcome::Moved
		}
	}
}

/// Vertical scroll position of the result viewport.
///
/// Keeps the active row visible with "nearest" placement: the offset moves
/// only as far as needed, and only when the active row changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollViewport {
	offset: usize,
	revealed: Option<usize>,
}

impl ScrollViewport {
	#[must_use]
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// Scroll so that `lines` (the active row's line span) fits inside a
	/// viewport `height` lines tall.
	pub fn reveal(&mut self, active: Option<usize>, lines: Range<usize>, height: usize) {
		if active == self.revealed {
			return;
		}
		self.revealed = active;
		if active.is_none() || height == 0 {
			return;
		}

		if lines.start < self.offset {
			self.offset = lines.start;
		} else if lines.end > self.offset + height {
			self.offset = if lines.len() > height {
				lines.start
			} else {
				lines.end - height
			};
		}
	}

	/// Keep the offset inside content that is `content` lines long.
	pub fn clamp(&mut self, content: usize, height: usize) {
		self.offset = self.offset.min(content.saturating_sub(height));
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn down_stops_at_last_row() {
		let mut cursor = NavigationCursor::default();
		cursor.hover(3, 4);
		assert_eq!(cursor.apply(NavKey::Down, 4), NavOutcome::Unchanged);
		assert_eq!(cursor.active(), Some(3));
		assert_eq!(cursor.apply(NavKey::Enter, 4), NavOutcome::Navigate(3));
	}

	#[test]
	fn up_from_first_row_deselects() {
		let mut cursor = NavigationCursor::default();
		assert_eq!(cursor.apply(NavKey::Down, 2), NavOutcome::Moved);
		assert_eq!(cursor.active(), Some(0));
		assert_eq!(cursor.apply(NavKey::Up, 2), NavOutcome::Moved);
		assert_eq!(cursor.active(), None);
		assert_eq!(cursor.apply(NavKey::Up, 2), NavOutcome::Unchanged);
	}

	#[test]
	fn enter_without_selection_does_nothing() {
		let mut cursor = NavigationCursor::default();
		assert_eq!(cursor.apply(NavKey::Enter, 5), NavOutcome::Unchanged);
	}

	#[test]
	fn escape_always_dismisses() {
		let mut cursor = NavigationCursor::default();
		assert_eq!(cursor.apply(NavKey::Escape, 0), NavOutcome::Dismiss);
		cursor.hover(1, 3);
		assert_eq!(cursor.apply(NavKey::Escape, 3), NavOutcome::Dismiss);
	}

	#[test]
	fn empty_list_keeps_no_selection() {
		let mut cursor = NavigationCursor::default();
		assert_eq!(cursor.apply(NavKey::Down, 0), NavOutcome::Unchanged);
		assert_eq!(cursor.active(), None);
		assert!(!cursor.hover(0, 0));
	}

	#[test]
	fn cursor_stays_in_bounds_for_any_key_sequence() {
		let keys = [NavKey::Down, NavKey::Up, NavKey::Down, NavKey::Down];
		let lengths = [0usize, 1, 3, 7];
		let mut cursor = NavigationCursor::default();
		let mut seed = 17u32;
		let mut len = 3;

		for _ in 0..500 {
			seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
			let choice = (seed >> 16) as usize;
			if choice % 9 == 0 {
				len = lengths[choice % lengths.len()];
				cursor.reset();
			} else {
				cursor.apply(keys[choice % keys.len()], len);
			}
			if let Some(active) = cursor.active() {
				assert!(active < len, "cursor {active} escaped list of {len}");
			}
		}
	}

	#[test]
	fn hover_selects_row() {
		let mut cursor = NavigationCursor::default();
		assert!(cursor.hover(2, 4));
		assert!(!cursor.hover(2, 4));
		assert_eq!(cursor.active(), Some(2));
		assert!(!cursor.hover(9, 4));
	}

	#[test]
	fn reveal_scrolls_down_just_enough() {
		let mut scroll = ScrollViewport::default();
		scroll.reveal(Some(0), 1..3, 6);
		assert_eq!(scroll.offset(), 0);
		scroll.reveal(Some(3), 7..9, 6);
		assert_eq!(scroll.offset(), 3);
	}

	#[test]
	fn reveal_scrolls_up_to_row_start() {
		let mut scroll = ScrollViewport::default();
		scroll.reveal(Some(5), 11..13, 4);
		assert_eq!(scroll.offset(), 9);
		scroll.reveal(Some(1), 3..5, 4);
		assert_eq!(scroll.offset(), 3);
	}

	#[test]
	fn reveal_ignores_unchanged_selection() {
		let mut scroll = ScrollViewport::default();
		scroll.reveal(Some(4), 9..11, 4);
		let offset = scroll.offset();
		scroll.reveal(Some(4), 0..2, 4);
		assert_eq!(scroll.offset(), offset);
	}

	#[test]
	fn clamp_limits_offset_to_content() {
		let mut scroll = ScrollViewport::default();
		scroll.reveal(Some(9), 20..22, 4);
		scroll.clamp(10, 4);
		assert_eq!(scroll.offset(), 6);
	}
}
