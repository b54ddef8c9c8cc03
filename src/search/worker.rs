use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::commands::{SearchCommand, SearchResult};
use crate::catalog::{MovieCatalog, QueryService};
use crate::trending::TrendingCommand;

/// Launches the background search worker thread and returns communication channels.
///
/// Successful searches are forwarded to `trending` when a trending worker is
/// attached.
pub(crate) fn spawn<C>(
	service: QueryService<C>,
	trending: Option<Sender<TrendingCommand>>,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResult>,
	Arc<AtomicU64>,
)
where
	C: MovieCatalog + 'static,
{
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || {
		worker_loop(&service, trending.as_ref(), command_rx, result_tx, &thread_latest)
	});

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop<C: MovieCatalog>(
	service: &QueryService<C>,
	trending: Option<&Sender<TrendingCommand>>,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
	latest_query_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(service, trending, &result_tx, latest_query_id, command) {
			break;
		}
	}
}

fn handle_command<C: MovieCatalog>(
	service: &QueryService<C>,
	trending: Option<&Sender<TrendingCommand>>,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query } => {
			if is_stale(id, latest_query_id) {
				log::debug!("skipping superseded query #{id}");
				return true;
			}

			let report = service.run(&query);
			if is_stale(id, latest_query_id) {
				log::debug!("dropping result of superseded query #{id}");
				return true;
			}

			if let (Some(hit), Some(trending)) = (report.hit, trending)
				&& trending.send(TrendingCommand::Increment(hit)).is_err()
			{
				log::warn!("trending worker stopped; search for '{query}' was not counted");
			}

			result_tx
				.send(SearchResult {
					id,
					query,
					outcome: report.outcome,
				})
				.is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

fn is_stale(id: u64, latest_query_id: &AtomicU64) -> bool {
	id < latest_query_id.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::Duration;

	use super::*;
	use crate::catalog::{CatalogEndpoint, CatalogError, CatalogPage, FetchOutcome, Movie};

	const IMAGES: &str = "https://image.tmdb.org/t/p";

	/// Serves one movie per search and optionally bumps the latest id while a
	/// request is in flight, simulating a newer keystroke landing mid-request.
	#[derive(Default)]
	struct FakeCatalog {
		requests: Arc<Mutex<Vec<CatalogEndpoint>>>,
		supersede: Arc<Mutex<Option<Arc<AtomicU64>>>>,
	}

	impl MovieCatalog for FakeCatalog {
		fn fetch(&self, endpoint: &CatalogEndpoint) -> Result<CatalogPage, CatalogError> {
			self.requests.lock().unwrap().push(endpoint.clone());
			if let Some(latest) = self.supersede.lock().unwrap().as_ref() {
				latest.fetch_add(1, Ordering::AcqRel);
			}
			Ok(CatalogPage::with_results(vec![
				Movie::new(268, "Batman").with_poster("/batman.jpg"),
			]))
		}
	}

	#[test]
	fn shutdown_command_stops_worker() {
		let service = QueryService::new(FakeCatalog::default(), IMAGES);
		let (tx, rx, latest) = spawn(service, None);
		assert_eq!(latest.load(Ordering::Relaxed), 0);
		tx.send(SearchCommand::Shutdown).unwrap();
		assert!(rx.recv_timeout(Duration::from_secs(1)).is_err());
	}

	#[test]
	fn query_results_are_forwarded_with_hit() {
		let catalog = FakeCatalog::default();
		let requests = Arc::clone(&catalog.requests);
		let (trending_tx, trending_rx) = mpsc::channel();
		let (tx, rx, latest) = spawn(QueryService::new(catalog, IMAGES), Some(trending_tx));

		latest.store(1, Ordering::Release);
		tx.send(SearchCommand::Query {
			id: 1,
			query: "batman".to_string(),
		})
		.unwrap();

		let result = rx.recv_timeout(Duration::from_secs(1)).expect("search result");
		assert_eq!(result.id, 1);
		assert_eq!(result.query, "batman");
		assert!(matches!(result.outcome, FetchOutcome::Success(ref movies) if movies.len() == 1));

		match trending_rx.recv_timeout(Duration::from_secs(1)) {
			Ok(TrendingCommand::Increment(hit)) => {
				assert_eq!(hit.term, "batman");
				assert_eq!(hit.snapshot.movie_id, 268);
			}
			other => panic!("expected an increment, got {other:?}"),
		}
		assert_eq!(requests.lock().unwrap().len(), 1);

		tx.send(SearchCommand::Shutdown).unwrap();
	}

	#[test]
	fn superseded_query_is_never_fetched() {
		let catalog = FakeCatalog::default();
		let requests = Arc::clone(&catalog.requests);
		let (tx, rx, latest) = spawn(QueryService::new(catalog, IMAGES), None);

		latest.store(2, Ordering::Release);
		tx.send(SearchCommand::Query {
			id: 1,
			query: "bat".to_string(),
		})
		.unwrap();
		tx.send(SearchCommand::Query {
			id: 2,
			query: "batman".to_string(),
		})
		.unwrap();

		let result = rx.recv_timeout(Duration::from_secs(1)).expect("latest result");
		assert_eq!(result.id, 2);
		assert_eq!(
			*requests.lock().unwrap(),
			vec![CatalogEndpoint::Search("batman".to_string())]
		);

		tx.send(SearchCommand::Shutdown).unwrap();
	}

	#[test]
	fn result_superseded_mid_request_is_dropped_without_counting() {
		let catalog = FakeCatalog::default();
		let supersede = Arc::clone(&catalog.supersede);
		let (trending_tx, trending_rx) = mpsc::channel();
		let (tx, rx, latest) = spawn(QueryService::new(catalog, IMAGES), Some(trending_tx));
		*supersede.lock().unwrap() = Some(Arc::clone(&latest));

		latest.store(1, Ordering::Release);
		tx.send(SearchCommand::Query {
			id: 1,
			query: "batman".to_string(),
		})
		.unwrap();

		assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
		assert!(trending_rx.try_recv().is_err());

		tx.send(SearchCommand::Shutdown).unwrap();
	}
}
