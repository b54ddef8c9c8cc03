use anyhow::{Context, Result};

use super::{App, SearchOutcome};
use crate::catalog::{HttpCatalog, MovieCatalog};
use crate::config::{AppConfig, TrendingBackend, TrendingConfig};
use crate::trending::{MemoryTrendingStore, RemoteTrendingStore, TrendingStore};
use crate::ui::style::{Theme, theme};

/// A small builder for configuring the interactive movie search.
///
/// Without overrides the catalog is reached over HTTP and the trending store
/// is chosen from [`TrendingConfig::backend`].
pub struct MovieSearch {
	config: AppConfig,
	catalog: Option<Box<dyn MovieCatalog>>,
	trending_store: Option<Box<dyn TrendingStore>>,
	input_title: Option<String>,
	initial_query: Option<String>,
	theme: Option<Theme>,
}

impl MovieSearch {
	#[must_use]
	pub fn new(config: AppConfig) -> Self {
		Self {
			config,
			catalog: None,
			trending_store: None,
			input_title: None,
			initial_query: None,
			theme: None,
		}
	}

	/// Replace the HTTP catalog, e.g. with canned pages.
	#[must_use]
	pub fn with_catalog(mut self, catalog: impl MovieCatalog + 'static) -> Self {
		self.catalog = Some(Box::new(catalog));
		self
	}

	#[must_use]
	pub fn with_trending_store(mut self, store: impl TrendingStore + 'static) -> Self {
		self.trending_store = Some(Box::new(store));
		self
	}

	#[must_use]
	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a built-in theme by name or alias. Unknown names keep the
	/// current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match theme::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => log::warn!("unknown theme '{name}'"),
		}
		self
	}

	/// Start the workers and return the configured [`App`] without taking
	/// over the terminal.
	pub fn build(self) -> Result<App<'static>> {
		let catalog = match self.catalog {
			Some(catalog) => catalog,
			None => Box::new(
				HttpCatalog::new(&self.config.catalog)
					.context("failed to create the catalog client")?,
			),
		};
		let store = match self.trending_store {
			Some(store) => store,
			None => default_store(&self.config.trending)?,
		};

		let mut app = App::new(&self.config, catalog, store);
		if let Some(title) = self.input_title {
			app.set_input_title(title);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = self.initial_query {
			app.set_initial_query(query);
		}
		Ok(app)
	}

	/// Run the interactive search with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		self.build()?.run()
	}
}

fn default_store(config: &TrendingConfig) -> Result<Box<dyn TrendingStore>> {
	match &config.backend {
		TrendingBackend::Memory => Ok(Box::new(MemoryTrendingStore::new())),
		TrendingBackend::Remote(remote) => {
			let store = RemoteTrendingStore::new(remote)
				.context("failed to create the trending store client")?;
			log::info!("recording trending searches in {}", store.documents_url());
			Ok(Box::new(store))
		}
	}
}
