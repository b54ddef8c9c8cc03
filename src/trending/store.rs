use std::sync::Arc;

use super::{MovieSnapshot, TrendingError, TrendingRecord};

/// Persistent per-term search tallies.
pub trait TrendingStore: Send {
	/// Count one more successful search for `term` and overwrite its snapshot.
	///
	/// Creates the record with a count of one when the term is new.
	fn increment(
		&self,
		term: &str,
		snapshot: &MovieSnapshot,
	) -> Result<TrendingRecord, TrendingError>;

	/// Up to `limit` records, highest count first. Equal counts keep the
	/// store's own ordering.
	fn top(&self, limit: usize) -> Result<Vec<TrendingRecord>, TrendingError>;
}

impl<T: TrendingStore + ?Sized> TrendingStore for Box<T> {
	fn increment(
		&self,
		term: &str,
		snapshot: &MovieSnapshot,
	) -> Result<TrendingRecord, TrendingError> {
		(**self).increment(term, snapshot)
	}

	fn top(&self, limit: usize) -> Result<Vec<TrendingRecord>, TrendingError> {
		(**self).top(limit)
	}
}

impl<T: TrendingStore + Sync + ?Sized> TrendingStore for Arc<T> {
	fn increment(
		&self,
		term: &str,
		snapshot: &MovieSnapshot,
	) -> Result<TrendingRecord, TrendingError> {
		(**self).increment(term, snapshot)
	}

	fn top(&self, limit: usize) -> Result<Vec<TrendingRecord>, TrendingError> {
		(**self).top(limit)
	}
}
