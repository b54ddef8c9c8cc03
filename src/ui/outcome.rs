use serde::Serialize;

use crate::catalog::Movie;
use crate::trending::TrendingRecord;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
	/// Whether the user confirmed a selection instead of cancelling.
	pub accepted: bool,
	/// Query text at the time the session ended.
	pub query: String,
	/// Movie highlighted when the user confirmed, if any.
	pub selection: Option<Movie>,
	/// Trending terms on display when the session ended, in rank order.
	pub trending: Vec<TrendingRecord>,
}

impl SearchOutcome {
	#[must_use]
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
			trending: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_trending(mut self, trending: Vec<TrendingRecord>) -> Self {
		self.trending = trending;
		self
	}
}
