use serde::{Deserialize, Serialize};

use crate::catalog::Movie;

/// One tallied search term as stored in the document collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingRecord {
	/// Identifier assigned by the store.
	#[serde(rename = "$id")]
	pub id: String,
	#[serde(rename = "searchTerm")]
	pub search_term: String,
	pub count: u64,
	#[serde(default)]
	pub movie_id: Option<u64>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub poster_url: String,
}

/// The representative movie captured alongside a tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSnapshot {
	pub movie_id: u64,
	pub title: String,
	/// Empty when the movie has no poster.
	pub poster_url: String,
}

impl MovieSnapshot {
	#[must_use]
	pub fn from_movie(movie: &Movie, image_base_url: &str) -> Self {
		Self {
			movie_id: movie.id,
			title: movie.title.clone(),
			poster_url: movie.poster_url(image_base_url).unwrap_or_default(),
		}
	}
}

/// A successful search to be counted: the term and its first result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
	pub term: String,
	pub snapshot: MovieSnapshot,
}
