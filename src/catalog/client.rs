use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use super::{CatalogEndpoint, CatalogError, CatalogPage};
use crate::config::CatalogConfig;

/// Source of movie pages.
///
/// The production implementation is [`HttpCatalog`]; tests substitute canned
/// pages.
pub trait MovieCatalog: Send {
	fn fetch(&self, endpoint: &CatalogEndpoint) -> Result<CatalogPage, CatalogError>;
}

impl<T: MovieCatalog + ?Sized> MovieCatalog for Box<T> {
	fn fetch(&self, endpoint: &CatalogEndpoint) -> Result<CatalogPage, CatalogError> {
		(**self).fetch(endpoint)
	}
}

/// Blocking HTTP client for a TMDB-compatible catalog.
pub struct HttpCatalog {
	client: Client,
	base_url: String,
	token: Option<String>,
}

impl HttpCatalog {
	pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
		let client = Client::builder().timeout(config.timeout).build()?;
		if config.token.is_none() {
			log::warn!("no catalog token configured; requests will be sent without authorization");
		}
		Ok(Self {
			client,
			base_url: config.base_url.clone(),
			token: config.token.clone(),
		})
	}

	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.base_url
	}
}

impl MovieCatalog for HttpCatalog {
	fn fetch(&self, endpoint: &CatalogEndpoint) -> Result<CatalogPage, CatalogError> {
		let url = endpoint.url(&self.base_url)?;
		let mut request = self.client.get(url).header(ACCEPT, "application/json");
		if let Some(token) = &self.token {
			request = request.bearer_auth(token);
		}

		let response = request.send()?;
		let status = response.status();
		if !status.is_success() {
			return Err(CatalogError::Status {
				status: status.as_u16(),
			});
		}

		let body = response.text()?;
		Ok(serde_json::from_str(&body)?)
	}
}
