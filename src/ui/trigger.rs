//! Cross-component "open the palette" signal.
//!
//! Any part of the page may hold a [`SearchTrigger`] and ask for the palette
//! without knowing who owns it. Requests are drained by the overlay on its
//! next tick.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Sending half; cheap to clone and hand out.
#[derive(Debug, Clone)]
pub struct SearchTrigger {
	tx: Sender<()>,
}

impl SearchTrigger {
	/// Ask the overlay to open. Returns `false` if the overlay is gone.
	pub fn request_open(&self) -> bool {
		self.tx.send(()).is_ok()
	}
}

/// Receiving half owned by the overlay.
#[derive(Debug)]
pub struct OpenRequests {
	rx: Receiver<()>,
}

impl OpenRequests {
	/// Consume every pending request, returning how many arrived.
	pub fn drain(&self) -> usize {
		let mut count = 0;
		loop {
			match self.rx.try_recv() {
				Ok(()) => count += 1,
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => return count,
			}
		}
	}
}

#[must_use]
pub fn channel() -> (SearchTrigger, OpenRequests) {
	let (tx, rx) = mpsc::channel();
	(SearchTrigger { tx }, OpenRequests { rx })
}
