use std::fmt;

use reqwest::Url;

use super::CatalogError;

pub const DISCOVER_PATH: &str = "/discover/movie";
pub const SEARCH_PATH: &str = "/search/movie";

/// The two request shapes the catalog supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEndpoint {
	/// Browse by descending popularity.
	Discover,
	/// Free-text search for the contained query.
	Search(String),
}

impl CatalogEndpoint {
	/// Empty queries discover, anything else searches.
	#[must_use]
	pub fn for_query(query: &str) -> Self {
		if query.is_empty() {
			Self::Discover
		} else {
			Self::Search(query.to_string())
		}
	}

	#[must_use]
	pub fn query(&self) -> Option<&str> {
		match self {
			Self::Discover => None,
			Self::Search(query) => Some(query),
		}
	}

	/// Build the request URL below `base_url`, encoding the query parameter.
	pub fn url(&self, base_url: &str) -> Result<Url, CatalogError> {
		let base = base_url.trim_end_matches('/');
		let parsed = match self {
			Self::Discover => Url::parse_with_params(
				&format!("{base}{DISCOVER_PATH}"),
				&[("sort_by", "popularity.desc")],
			),
			Self::Search(query) => Url::parse_with_params(
				&format!("{base}{SEARCH_PATH}"),
				&[("query", query.as_str())],
			),
		};
		parsed.map_err(|err| CatalogError::InvalidUrl {
			url: base.to_string(),
			reason: err.to_string(),
		})
	}
}

impl fmt::Display for CatalogEndpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Discover => f.write_str("discover"),
			Self::Search(query) => write!(f, "search '{query}'"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const BASE: &str = "https://api.themoviedb.org/3";

	#[test]
	fn empty_query_discovers_by_popularity() {
		let endpoint = CatalogEndpoint::for_query("");
		assert_eq!(endpoint, CatalogEndpoint::Discover);
		assert_eq!(
			endpoint.url(BASE).expect("url").as_str(),
			"https://api.themoviedb.org/3/discover/movie?sort_by=popularity.desc"
		);
	}

	#[test]
	fn non_empty_query_searches() {
		let endpoint = CatalogEndpoint::for_query("dune");
		assert_eq!(endpoint.query(), Some("dune"));
		assert_eq!(
			endpoint.url(BASE).expect("url").as_str(),
			"https://api.themoviedb.org/3/search/movie?query=dune"
		);
	}

	#[test]
	fn whitespace_query_still_searches() {
		assert_eq!(
			CatalogEndpoint::for_query(" "),
			CatalogEndpoint::Search(" ".to_string())
		);
	}

	#[test]
	fn query_is_url_encoded() {
		let url = CatalogEndpoint::for_query("amélie & co?")
			.url(BASE)
			.expect("url");
		let pairs: Vec<(String, String)> = url
			.query_pairs()
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect();
		assert_eq!(pairs, vec![("query".to_string(), "amélie & co?".to_string())]);
		assert!(!url.as_str().contains(' '));
		assert!(!url.as_str().contains("& co"));
	}

	#[test]
	fn trailing_slash_on_base_is_tolerated() {
		let url = CatalogEndpoint::Discover
			.url("http://localhost:8080/3/")
			.expect("url");
		assert_eq!(url.path(), "/3/discover/movie");
	}

	#[test]
	fn invalid_base_is_reported() {
		let err = CatalogEndpoint::Discover
			.url("not a url")
			.expect_err("invalid base");
		assert!(matches!(err, CatalogError::InvalidUrl { .. }));
	}
}
