use super::{CatalogEndpoint, Movie, MovieCatalog};
use crate::trending::{MovieSnapshot, SearchHit};

/// Shown for transport failures, non-success statuses and unreadable bodies.
pub const FETCH_FAILURE_MESSAGE: &str = "Error fetching movies. Please try again later.";
/// Shown when the catalog flags a failure without saying why.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to fetch movies";

/// How a single catalog request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
	Success(Vec<Movie>),
	/// The catalog answered but flagged an application-level failure.
	Empty(String),
	Failure(String),
}

impl FetchOutcome {
	#[must_use]
	pub fn failure() -> Self {
		Self::Failure(FETCH_FAILURE_MESSAGE.to_string())
	}
}

/// Everything the results area can show. Loading and error states are
/// mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
	#[default]
	Idle,
	Loading,
	Success(Vec<Movie>),
	Empty(String),
	Failure(String),
}

impl FetchState {
	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	/// Movies on display; empty for every state except `Success`.
	#[must_use]
	pub fn movies(&self) -> &[Movie] {
		match self {
			Self::Success(movies) => movies,
			_ => &[],
		}
	}

	#[must_use]
	pub fn error_message(&self) -> Option<&str> {
		match self {
			Self::Empty(message) | Self::Failure(message) => Some(message),
			_ => None,
		}
	}
}

impl From<FetchOutcome> for FetchState {
	fn from(outcome: FetchOutcome) -> Self {
		match outcome {
			FetchOutcome::Success(movies) => Self::Success(movies),
			FetchOutcome::Empty(message) => Self::Empty(message),
			FetchOutcome::Failure(message) => Self::Failure(message),
		}
	}
}

/// Result of one [`QueryService::run`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryReport {
	pub outcome: FetchOutcome,
	/// Set when a non-empty search returned at least one movie; the first
	/// movie is the representative result for the trending tally.
	pub hit: Option<SearchHit>,
}

/// Runs catalog queries and normalises the response.
pub struct QueryService<C> {
	catalog: C,
	image_base_url: String,
}

impl<C: MovieCatalog> QueryService<C> {
	pub fn new(catalog: C, image_base_url: impl Into<String>) -> Self {
		Self {
			catalog,
			image_base_url: image_base_url.into(),
		}
	}

	/// Issue exactly one catalog request for `query`.
	pub fn run(&self, query: &str) -> QueryReport {
		let endpoint = CatalogEndpoint::for_query(query);

		let page = match self.catalog.fetch(&endpoint) {
			Ok(page) => page,
			Err(err) => {
				log::warn!("error fetching movies ({endpoint}): {err}");
				return QueryReport {
					outcome: FetchOutcome::failure(),
					hit: None,
				};
			}
		};

		if page.is_rejected() {
			let message = page
				.error
				.filter(|message| !message.is_empty())
				.unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string());
			log::warn!("catalog rejected {endpoint}: {message}");
			return QueryReport {
				outcome: FetchOutcome::Empty(message),
				hit: None,
			};
		}

		let movies = page.results.unwrap_or_default();
		log::debug!("{endpoint} returned {} movies", movies.len());
		let hit = match (endpoint.query(), movies.first()) {
			(Some(term), Some(first)) => Some(SearchHit {
				term: term.to_string(),
				snapshot: MovieSnapshot::from_movie(first, &self.image_base_url),
			}),
			_ => None,
		};

		QueryReport {
			outcome: FetchOutcome::Success(movies),
			hit,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::catalog::{CatalogError, CatalogPage};

	const IMAGES: &str = "https://image.tmdb.org/t/p";

	type Responder =
		Box<dyn Fn(&CatalogEndpoint) -> Result<CatalogPage, CatalogError> + Send + Sync>;

	/// Records requested endpoints.
	struct ScriptedCatalog {
		respond: Responder,
		calls: Mutex<Vec<CatalogEndpoint>>,
	}

	impl ScriptedCatalog {
		fn new(
			respond: impl Fn(&CatalogEndpoint) -> Result<CatalogPage, CatalogError>
				+ Send
				+ Sync
				+ 'static,
		) -> Self {
			Self {
				respond: Box::new(respond),
				calls: Mutex::new(Vec::new()),
			}
		}
	}

	impl MovieCatalog for &ScriptedCatalog {
		fn fetch(&self, endpoint: &CatalogEndpoint) -> Result<CatalogPage, CatalogError> {
			self.calls.lock().unwrap().push(endpoint.clone());
			(self.respond)(endpoint)
		}
	}

	fn service(catalog: &ScriptedCatalog) -> QueryService<&ScriptedCatalog> {
		QueryService::new(catalog, IMAGES)
	}

	fn batman_results() -> Vec<Movie> {
		vec![
			Movie::new(268, "Batman").with_poster("/batman.jpg"),
			Movie::new(414906, "The Batman").with_poster("/the-batman.jpg"),
		]
	}

	#[test]
	fn empty_query_uses_discover_endpoint() {
		let catalog = ScriptedCatalog::new(|_| Ok(CatalogPage::with_results(Vec::new())));
		let report = service(&catalog).run("");

		assert_eq!(report.outcome, FetchOutcome::Success(Vec::new()));
		assert_eq!(report.hit, None);
		let calls = catalog.calls.lock().unwrap();
		assert_eq!(calls.len(), 1);
		assert_eq!(calls[0], CatalogEndpoint::Discover);
	}

	#[test]
	fn discover_results_never_produce_a_hit() {
		let catalog = ScriptedCatalog::new(|_| Ok(CatalogPage::with_results(batman_results())));
		let report = service(&catalog).run("");
		assert_eq!(report.hit, None);
		assert_eq!(report.outcome, FetchOutcome::Success(batman_results()));
	}

	#[test]
	fn search_with_results_hands_off_first_movie() {
		let catalog = ScriptedCatalog::new(|_| Ok(CatalogPage::with_results(batman_results())));
		let report = service(&catalog).run("batman");

		assert_eq!(report.outcome, FetchOutcome::Success(batman_results()));
		let hit = report.hit.expect("hit for non-empty search");
		assert_eq!(hit.term, "batman");
		assert_eq!(hit.snapshot.movie_id, 268);
		assert_eq!(hit.snapshot.title, "Batman");
		assert_eq!(
			hit.snapshot.poster_url,
			"https://image.tmdb.org/t/p/w500/batman.jpg"
		);
		assert_eq!(
			catalog.calls.lock().unwrap()[0],
			CatalogEndpoint::Search("batman".to_string())
		);
	}

	#[test]
	fn search_without_results_skips_hand_off() {
		let catalog = ScriptedCatalog::new(|_| Ok(CatalogPage::default()));
		let report = service(&catalog).run("zzzzqx");
		assert_eq!(report.outcome, FetchOutcome::Success(Vec::new()));
		assert_eq!(report.hit, None);
	}

	#[test]
	fn http_failure_reports_generic_message() {
		let catalog = ScriptedCatalog::new(|_| Err(CatalogError::Status { status: 500 }));
		let report = service(&catalog).run("dune");

		assert_eq!(
			report.outcome,
			FetchOutcome::Failure(FETCH_FAILURE_MESSAGE.to_string())
		);
		assert_eq!(report.hit, None);
		let state = FetchState::from(report.outcome);
		assert!(state.movies().is_empty());
		assert_eq!(state.error_message(), Some(FETCH_FAILURE_MESSAGE));
	}

	#[test]
	fn embedded_failure_surfaces_its_message() {
		let catalog =
			ScriptedCatalog::new(|_| Ok(CatalogPage::rejected(Some("Invalid API key"))));
		let report = service(&catalog).run("dune");

		assert_eq!(
			report.outcome,
			FetchOutcome::Empty("Invalid API key".to_string())
		);
		let state = FetchState::from(report.outcome);
		assert!(state.movies().is_empty());
		assert_eq!(state.error_message(), Some("Invalid API key"));
	}

	#[test]
	fn embedded_failure_without_message_uses_fallback() {
		let catalog = ScriptedCatalog::new(|_| Ok(CatalogPage::rejected(None)));
		let report = service(&catalog).run("dune");
		assert_eq!(
			report.outcome,
			FetchOutcome::Empty(REJECTED_FALLBACK_MESSAGE.to_string())
		);
	}
}
