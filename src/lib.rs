//! Core crate exports for building and running the `marquee` movie finder.
//!
//! The root module re-exports the catalog, trending and UI types so that
//! embedders can wire their own catalog or trending backend into the terminal
//! interface without digging through the module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod logging;
mod search;
pub mod trending;
pub mod ui;

pub use catalog::{
	CatalogEndpoint, CatalogError, FetchOutcome, FetchState, HttpCatalog, Movie, MovieCatalog,
	QueryService,
};
pub use config::{AppConfig, CatalogConfig, RemoteStoreConfig, TrendingBackend, TrendingConfig};
pub use debounce::Debouncer;
pub use trending::{
	MemoryTrendingStore, MovieSnapshot, RemoteTrendingStore, TrendingError, TrendingRecord,
	TrendingStore,
};
pub use ui::style::theme::{self, Theme};
pub use ui::{App, MovieSearch, SearchOutcome, run};
