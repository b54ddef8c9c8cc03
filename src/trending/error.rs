use thiserror::Error;

/// Failures reading or writing trending tallies.
///
/// Callers log these and carry on; they never reach the user.
#[derive(Debug, Error)]
pub enum TrendingError {
	#[error("trending store request failed: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("trending store responded with status {status}: {message}")]
	Status { status: u16, message: String },

	#[error("failed to decode trending store response: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("invalid trending store url '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },
}

impl TrendingError {
	/// Whether the store refused a write because the document already exists.
	#[must_use]
	pub fn is_conflict(&self) -> bool {
		matches!(self, Self::Status { status: 409, .. })
	}
}
