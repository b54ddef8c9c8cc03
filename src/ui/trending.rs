use std::sync::mpsc::TryRecvError;

use super::App;
use crate::trending::{TrendingRecord, TrendingUpdate};

impl App<'_> {
	/// Drain updates from the trending worker.
	pub(crate) fn pump_trending_updates(&mut self) {
		loop {
			match self.trending_updates.try_recv() {
				Ok(update) => self.handle_trending_update(update),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_trending_update(&mut self, update: TrendingUpdate) {
		match update {
			TrendingUpdate::Loaded(records) => {
				log::debug!("showing {} trending terms", records.len());
				self.trending = records;
			}
			TrendingUpdate::Recorded(record) => self.refresh_trending_entry(record),
		}
	}

	/// Refresh a listed term in place. The ranking itself is only loaded at
	/// startup, so new or reordered terms wait for the next session.
	fn refresh_trending_entry(&mut self, record: TrendingRecord) {
		if let Some(entry) = self
			.trending
			.iter_mut()
			.find(|entry| entry.search_term == record.search_term)
		{
			*entry = record;
		}
	}
}
