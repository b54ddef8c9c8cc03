//! Quiescence filter for prompt input.
//!
//! Every keystroke replaces the pending value and pushes its deadline out by
//! the configured window. A value is released only once the input has been
//! quiet for the whole window, so a burst of typing produces one settled
//! query. Callers pass the current [`Instant`] explicitly which keeps the
//! filter deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending {
	value: String,
	/// `None` releases on the next poll.
	due: Option<Instant>,
}

/// Coalesces rapid input changes into a single settled value.
#[derive(Debug, Clone)]
pub struct Debouncer {
	window: Duration,
	pending: Option<Pending>,
	settled: Option<String>,
}

impl Debouncer {
	/// Create a debouncer whose `initial` value is released on the first poll.
	#[must_use]
	pub fn new(window: Duration, initial: impl Into<String>) -> Self {
		Self {
			window,
			pending: Some(Pending {
				value: initial.into(),
				due: None,
			}),
			settled: None,
		}
	}

	#[must_use]
	pub fn window(&self) -> Duration {
		self.window
	}

	/// Record a new raw value observed at `now`, cancelling any pending one.
	pub fn push(&mut self, value: impl Into<String>, now: Instant) {
		self.pending = Some(Pending {
			value: value.into(),
			due: Some(now + self.window),
		});
	}

	/// Release the pending value if its quiet window has elapsed by `now`.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		let ready = self
			.pending
			.as_ref()
			.is_some_and(|pending| pending.due.is_none_or(|due| now >= due));
		if !ready {
			return None;
		}

		let pending = self.pending.take()?;
		self.settled = Some(pending.value.clone());
		Some(pending.value)
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Remaining quiet time before the pending value is released.
	#[must_use]
	pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
		let pending = self.pending.as_ref()?;
		Some(
			pending
				.due
				.map_or(Duration::ZERO, |due| due.saturating_duration_since(now)),
		)
	}

	/// The most recently released value.
	#[must_use]
	pub fn settled(&self) -> Option<&str> {
		self.settled.as_deref()
	}
}
