use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::{SearchHit, TrendingRecord, TrendingStore};

/// Commands understood by the background trending worker.
#[derive(Debug)]
pub enum TrendingCommand {
	/// Count a successful search.
	Increment(SearchHit),
	/// Load the `limit` most frequent terms.
	LoadTop { limit: usize },
	/// Stop the background worker thread.
	Shutdown,
}

/// Messages sent back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrendingUpdate {
	Loaded(Vec<TrendingRecord>),
	Recorded(TrendingRecord),
}

/// Launches the thread that owns `store` and applies commands in arrival
/// order.
pub fn spawn(
	store: Box<dyn TrendingStore>,
) -> (Sender<TrendingCommand>, Receiver<TrendingUpdate>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (update_tx, update_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(store.as_ref(), command_rx, update_tx));

	(command_tx, update_rx)
}

fn worker_loop(
	store: &dyn TrendingStore,
	command_rx: Receiver<TrendingCommand>,
	update_tx: Sender<TrendingUpdate>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(store, &update_tx, command) {
			break;
		}
	}
}

fn handle_command(
	store: &dyn TrendingStore,
	update_tx: &Sender<TrendingUpdate>,
	command: TrendingCommand,
) -> bool {
	match command {
		TrendingCommand::Increment(hit) => {
			match store.increment(&hit.term, &hit.snapshot) {
				Ok(record) => {
					log::debug!("'{}' searched {} times", record.search_term, record.count);
					// The UI may already be gone; nothing else depends on this.
					let _ = update_tx.send(TrendingUpdate::Recorded(record));
				}
				Err(err) => log::warn!("failed to record search for '{}': {err}", hit.term),
			}
			true
		}
		TrendingCommand::LoadTop { limit } => {
			match store.top(limit) {
				Ok(records) => {
					log::debug!("loaded {} trending terms", records.len());
					return update_tx.send(TrendingUpdate::Loaded(records)).is_ok();
				}
				Err(err) => log::warn!("error fetching trending movies: {err}"),
			}
			true
		}
		TrendingCommand::Shutdown => false,
	}
}
