use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{MovieSnapshot, TrendingError, TrendingRecord, TrendingStore};

/// In-process store, used when no remote collection is configured.
///
/// Records keep their creation order, which breaks ties in [`top`].
///
/// [`top`]: TrendingStore::top
#[derive(Debug, Default)]
pub struct MemoryTrendingStore {
	inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
	records: Vec<TrendingRecord>,
	next_id: u64,
}

impl MemoryTrendingStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed the store with existing records, in creation order.
	#[must_use]
	pub fn with_records(records: Vec<TrendingRecord>) -> Self {
		let next_id = u64::try_from(records.len()).unwrap_or(u64::MAX);
		Self {
			inner: Mutex::new(Inner { records, next_id }),
		}
	}

	/// Every record in creation order.
	#[must_use]
	pub fn records(&self) -> Vec<TrendingRecord> {
		self.lock().records.clone()
	}

	fn lock(&self) -> MutexGuard<'_, Inner> {
		self.inner.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

impl TrendingStore for MemoryTrendingStore {
	fn increment(
		&self,
		term: &str,
		snapshot: &MovieSnapshot,
	) -> Result<TrendingRecord, TrendingError> {
		let mut inner = self.lock();
		if let Some(record) = inner
			.records
			.iter_mut()
			.find(|record| record.search_term == term)
		{
			record.count += 1;
			apply_snapshot(record, snapshot);
			return Ok(record.clone());
		}

		inner.next_id += 1;
		let mut record = TrendingRecord {
			id: format!("mem-{}", inner.next_id),
			search_term: term.to_string(),
			count: 1,
			movie_id: None,
			title: String::new(),
			poster_url: String::new(),
		};
		apply_snapshot(&mut record, snapshot);
		inner.records.push(record.clone());
		Ok(record)
	}

	fn top(&self, limit: usize) -> Result<Vec<TrendingRecord>, TrendingError> {
		let mut records = self.lock().records.clone();
		// Stable, so equal counts stay in creation order.
		records.sort_by(|a, b| b.count.cmp(&a.count));
		records.truncate(limit);
		Ok(records)
	}
}

fn apply_snapshot(record: &mut TrendingRecord, snapshot: &MovieSnapshot) {
	record.movie_id = Some(snapshot.movie_id);
	record.title = snapshot.title.clone();
	record.poster_url = snapshot.poster_url.clone();
}
