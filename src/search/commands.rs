use crate::catalog::FetchOutcome;

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Fetch movies for the provided query.
	Query {
		/// Identifier that allows the UI to correlate responses with the originating query.
		id: u64,
		/// Settled query text; empty means discover.
		query: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Outcome of one catalog request, emitted back to the UI layer.
#[derive(Debug)]
pub(crate) struct SearchResult {
	/// Identifier matching the [`SearchCommand::Query`] that produced the result.
	pub(crate) id: u64,
	pub(crate) query: String,
	pub(crate) outcome: FetchOutcome,
}
