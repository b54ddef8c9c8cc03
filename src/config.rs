//! Runtime configuration shared by the catalog client, the trending store and
//! the terminal UI.
//!
//! An [`AppConfig`] is built once at startup (the binary resolves it from
//! files, environment and flags) and handed by reference to every component
//! that needs it.

use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(700);
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Connection settings for the movie catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
	pub base_url: String,
	pub image_base_url: String,
	/// Bearer credential sent in the `Authorization` header.
	pub token: Option<String>,
	pub timeout: Duration,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_CATALOG_URL.to_string(),
			image_base_url: DEFAULT_IMAGE_URL.to_string(),
			token: None,
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

/// Location and credentials of the remote document store holding trending
/// search terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteStoreConfig {
	pub endpoint: String,
	pub project: String,
	pub database: String,
	pub collection: String,
	pub api_key: Option<String>,
	pub timeout: Duration,
}

/// Which store keeps the trending tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrendingBackend {
	/// Session-local tallies that vanish on exit.
	#[default]
	Memory,
	Remote(RemoteStoreConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingConfig {
	pub backend: TrendingBackend,
	/// Number of trending terms loaded at startup.
	pub limit: usize,
}

impl Default for TrendingConfig {
	fn default() -> Self {
		Self {
			backend: TrendingBackend::default(),
			limit: DEFAULT_TRENDING_LIMIT,
		}
	}
}

/// Everything the application needs to run a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
	pub catalog: CatalogConfig,
	pub trending: TrendingConfig,
	/// Quiet period the prompt must observe before a query is sent.
	pub debounce: Duration,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			catalog: CatalogConfig::default(),
			trending: TrendingConfig::default(),
			debounce: DEFAULT_DEBOUNCE,
		}
	}
}
