use std::time::{Duration, Instant};

/// Holds back a rapidly changing value until it has been stable for `delay`.
///
/// The scheduler never owns a timer. The event loop calls [`Debouncer::poll`]
/// every frame with the current instant, which keeps the type single-threaded
/// and lets tests drive time explicitly.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<Pending<T>>,
	latest: Option<T>,
	emitted: Option<T>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
	value: T,
	changed_at: Instant,
}

impl<T> Debouncer<T>
where
	T: Clone + PartialEq,
{
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
			latest: None,
			emitted: None,
		}
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Record a new input value observed at `now`.
	///
	/// Repeating the most recent value is ignored so the quiet window is not
	/// restarted by no-op edits.
	pub fn update(&mut self, value: T, now: Instant) {
		if self.latest.as_ref() == Some(&value) {
			return;
		}
		self.latest = Some(value.clone());
		self.pending = Some(Pending {
			value,
			changed_at: now,
		});
	}

	/// Release the pending value once its quiet window has elapsed.
	///
	/// A value is released at most once, and only if it differs from the
	/// previously released one.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let ready = self
			.pending
			.as_ref()
			.is_some_and(|pending| now.saturating_duration_since(pending.changed_at) >= self.delay);
		if !ready {
			return None;
		}

		let Pending { value, .. } = self.pending.take()?;
		if self.emitted.as_ref() == Some(&value) {
			return None;
		}
		self.emitted = Some(value.clone());
		Some(value)
	}

	/// When the pending value will be released, if there is one.
	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending
			.as_ref()
			.map(|pending| pending.changed_at + self.delay)
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Drop the pending value without releasing it.
	pub fn cancel(&mut self) {
		self.pending = None;
		self.latest = self.emitted.clone();
	}

	/// Forget everything, including the last released value.
	pub fn reset(&mut self) {
		self.pending = None;
		self.latest = None;
		self.emitted = None;
	}
}
