//! Movie catalog access.
//!
//! [`CatalogEndpoint`] picks between the "discover popular" and "search by
//! query" targets, [`MovieCatalog`] performs the request, and
//! [`QueryService`] turns a raw page into the [`FetchOutcome`] the UI renders.

mod client;
mod endpoint;
mod error;
mod service;
mod types;

pub use client::{HttpCatalog, MovieCatalog};
pub use endpoint::{CatalogEndpoint, DISCOVER_PATH, SEARCH_PATH};
pub use error::CatalogError;
pub use service::{
	FETCH_FAILURE_MESSAGE, FetchOutcome, FetchState, QueryReport, QueryService,
	REJECTED_FALLBACK_MESSAGE,
};
pub use types::{CatalogPage, Movie};
