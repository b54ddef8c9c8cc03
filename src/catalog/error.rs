use thiserror::Error;

/// Failures talking to the movie catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("invalid catalog url '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },

	#[error("catalog request failed: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("catalog responded with status {status}")]
	Status { status: u16 },

	#[error("failed to decode catalog response: {0}")]
	Decode(#[from] serde_json::Error),
}
