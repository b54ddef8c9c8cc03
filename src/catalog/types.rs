use serde::{Deserialize, Serialize};

const POSTER_SIZE: &str = "w500";

/// A single movie as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
	pub id: u64,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub poster_path: Option<String>,
	#[serde(default)]
	pub popularity: f64,
	#[serde(default)]
	pub release_date: Option<String>,
	#[serde(default)]
	pub vote_average: Option<f64>,
	#[serde(default)]
	pub original_language: Option<String>,
	#[serde(default)]
	pub overview: Option<String>,
}

impl Movie {
	#[must_use]
	pub fn new(id: u64, title: impl Into<String>) -> Self {
		Self {
			id,
			title: title.into(),
			poster_path: None,
			popularity: 0.0,
			release_date: None,
			vote_average: None,
			original_language: None,
			overview: None,
		}
	}

	#[must_use]
	pub fn with_poster(mut self, poster_path: impl Into<String>) -> Self {
		self.poster_path = Some(poster_path.into());
		self
	}

	#[must_use]
	pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
		self.release_date = Some(date.into());
		self
	}

	#[must_use]
	pub fn with_popularity(mut self, popularity: f64) -> Self {
		self.popularity = popularity;
		self
	}

	#[must_use]
	pub fn with_vote_average(mut self, vote_average: f64) -> Self {
		self.vote_average = Some(vote_average);
		self
	}

	/// Release year, when the catalog provided a usable date.
	#[must_use]
	pub fn year(&self) -> Option<&str> {
		let date = self.release_date.as_deref()?;
		date.get(..4).filter(|year| year.chars().all(|ch| ch.is_ascii_digit()))
	}

	/// Full poster URL under `image_base_url`, if the movie has a poster.
	#[must_use]
	pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
		let path = self.poster_path.as_deref().filter(|path| !path.is_empty())?;
		let base = image_base_url.trim_end_matches('/');
		if path.starts_with('/') {
			Some(format!("{base}/{POSTER_SIZE}{path}"))
		} else {
			Some(format!("{base}/{POSTER_SIZE}/{path}"))
		}
	}
}

/// Raw response body of a discover or search request.
///
/// Besides the result list, some deployments signal failures inside an
/// otherwise successful response through `Response: "False"` and `Error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
	#[serde(default)]
	pub results: Option<Vec<Movie>>,
	#[serde(rename = "Response", default)]
	pub response: Option<String>,
	#[serde(rename = "Error", default)]
	pub error: Option<String>,
}

impl CatalogPage {
	#[must_use]
	pub fn with_results(results: Vec<Movie>) -> Self {
		Self {
			results: Some(results),
			..Self::default()
		}
	}

	#[must_use]
	pub fn rejected(message: Option<&str>) -> Self {
		Self {
			results: None,
			response: Some("False".to_string()),
			error: message.map(str::to_string),
		}
	}

	/// Whether the payload carries an application-level failure flag.
	#[must_use]
	pub fn is_rejected(&self) -> bool {
		self.response.as_deref() == Some("False")
	}
}
