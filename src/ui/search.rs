use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use super::App;
use crate::catalog::{FETCH_FAILURE_MESSAGE, FetchState};
use crate::search::SearchResult;

impl App<'_> {
	/// Release a settled query from the debouncer, if one is due.
	pub(crate) fn tick(&mut self, now: Instant) {
		if let Some(query) = self.debouncer.poll(now) {
			self.request_search(query);
		}
	}

	/// Send `query` to the search worker unless it is already the displayed
	/// query.
	pub(crate) fn request_search(&mut self, query: String) {
		if self.last_query.as_deref() == Some(query.as_str()) {
			return;
		}

		self.fetch = FetchState::Loading;
		self.table_state.select(None);
		if !self.search.issue_search(query.clone()) {
			log::error!("search worker stopped; cannot run query '{query}'");
			self.fetch = FetchState::Failure(FETCH_FAILURE_MESSAGE.to_string());
		}
		self.last_query = Some(query);
	}

	/// Drain any search results waiting on the receiver channel.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(result) => self.handle_search_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					if self.fetch.is_loading() {
						log::error!("search worker disconnected with a query in flight");
						self.fetch = FetchState::Failure(FETCH_FAILURE_MESSAGE.to_string());
					}
					break;
				}
			}
		}
	}

	/// Apply a search result if it corresponds to the most recent query.
	pub(in crate::ui) fn handle_search_result(&mut self, result: SearchResult) {
		if !self.search.matches_latest(result.id) {
			log::debug!("ignoring stale result for '{}'", result.query);
			return;
		}

		self.fetch = result.outcome.into();
		self.ensure_selection();
	}
}
