use std::env;
use std::time::Duration;

use marquee::config::{
	DEFAULT_CATALOG_URL, DEFAULT_DEBOUNCE, DEFAULT_IMAGE_URL, DEFAULT_TIMEOUT,
	DEFAULT_TRENDING_LIMIT,
};
use marquee::{AppConfig, CatalogConfig, RemoteStoreConfig, TrendingBackend, TrendingConfig, theme};
use serde::Deserialize;

use super::resolved::{ResolvedConfig, SettingSource, SettingsError};
use crate::cli::CliArgs;

/// Conventional variable holding a catalog token, consulted last.
pub(super) const TOKEN_FALLBACK_ENV: &str = "TMDB_API_KEY";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	trending: TrendingSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	base_url: Option<String>,
	image_base_url: Option<String>,
	token: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TrendingSection {
	endpoint: Option<String>,
	project: Option<String>,
	database: Option<String>,
	collection: Option<String>,
	api_key: Option<String>,
	limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	input_title: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
	debounce_ms: Option<u64>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(token) = cli.token.clone() {
			self.catalog.token = Some(token);
		}
		if let Some(url) = cli.base_url.clone() {
			self.catalog.base_url = Some(url);
		}
		if let Some(limit) = cli.trending_limit {
			self.trending.limit = Some(limit);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.input_title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(debounce) = cli.debounce_ms {
			self.ui.debounce_ms = Some(debounce);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig, SettingsError> {
		self.resolve_with(cli, |name| env::var(name).ok())
	}

	/// Same as [`RawConfig::resolve`] with an explicit environment lookup.
	pub(super) fn resolve_with(
		self,
		cli: &CliArgs,
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<ResolvedConfig, SettingsError> {
		let origin = |flag_set: bool, flag: &'static str, var: &'static str, key: &'static str| {
			detect_source(flag_set, lookup(var).is_some(), flag, var, key)
		};

		let base_url = non_blank(self.catalog.base_url)
			.unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
		if !is_http_url(&base_url) {
			return Err(SettingsError::invalid(
				"catalog.base_url",
				base_url,
				origin(
					cli.base_url.is_some(),
					"--base-url",
					"MARQUEE__CATALOG__BASE_URL",
					"catalog.base_url",
				),
				"must be an http or https URL",
			));
		}

		let image_base_url = non_blank(self.catalog.image_base_url)
			.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

		let timeout = match self.catalog.timeout_secs {
			Some(0) => {
				return Err(SettingsError::invalid(
					"catalog.timeout_secs",
					"0",
					origin(
						false,
						"",
						"MARQUEE__CATALOG__TIMEOUT_SECS",
						"catalog.timeout_secs",
					),
					"must be at least 1",
				));
			}
			Some(secs) => Duration::from_secs(secs),
			None => DEFAULT_TIMEOUT,
		};

		let token =
			non_blank(self.catalog.token).or_else(|| non_blank(lookup(TOKEN_FALLBACK_ENV)));

		let limit = match self.trending.limit {
			Some(0) => {
				return Err(SettingsError::invalid(
					"trending.limit",
					"0",
					origin(
						cli.trending_limit.is_some(),
						"--trending-limit",
						"MARQUEE__TRENDING__LIMIT",
						"trending.limit",
					),
					"must be at least 1",
				));
			}
			Some(limit) => limit,
			None => DEFAULT_TRENDING_LIMIT,
		};
		let backend = self.trending.backend(timeout)?;

		let debounce = self
			.ui
			.debounce_ms
			.map_or(DEFAULT_DEBOUNCE, Duration::from_millis);

		let theme_name = non_blank(self.ui.theme);
		if let Some(name) = &theme_name
			&& theme::by_name(name).is_none()
		{
			return Err(SettingsError::invalid(
				"ui.theme",
				name.clone(),
				origin(
					cli.theme.is_some(),
					"--theme",
					"MARQUEE__UI__THEME",
					"ui.theme",
				),
				format!("unknown theme; choose one of {}", theme::names().join(", ")),
			));
		}

		Ok(ResolvedConfig {
			app: AppConfig {
				catalog: CatalogConfig {
					base_url,
					image_base_url,
					token,
					timeout,
				},
				trending: TrendingConfig { backend, limit },
				debounce,
			},
			input_title: non_blank(self.ui.input_title),
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme: theme_name,
		})
	}
}

impl TrendingSection {
	/// The remote store is used only when every location key is present.
	fn backend(&self, timeout: Duration) -> Result<TrendingBackend, SettingsError> {
		let fields = [
			("trending.endpoint", non_blank(self.endpoint.clone())),
			("trending.project", non_blank(self.project.clone())),
			("trending.database", non_blank(self.database.clone())),
			("trending.collection", non_blank(self.collection.clone())),
		];
		let missing: Vec<&'static str> = fields
			.iter()
			.filter(|(_, value)| value.is_none())
			.map(|(key, _)| *key)
			.collect();

		if missing.len() == fields.len() {
			return Ok(TrendingBackend::Memory);
		}
		if !missing.is_empty() {
			return Err(SettingsError::IncompleteRemote { missing });
		}

		let [endpoint, project, database, collection] =
			fields.map(|(_, value)| value.unwrap_or_default());
		Ok(TrendingBackend::Remote(RemoteStoreConfig {
			endpoint,
			project,
			database,
			collection,
			api_key: non_blank(self.api_key.clone()),
			timeout,
		}))
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

fn is_http_url(value: &str) -> bool {
	value.starts_with("http://") || value.starts_with("https://")
}

fn detect_source(
	cli_present: bool,
	env_present: bool,
	cli_flag: &'static str,
	env_var: &'static str,
	key: &'static str,
) -> SettingSource {
	if cli_present {
		return SettingSource::CliFlag(cli_flag);
	}
	if env_present {
		return SettingSource::Environment(env_var);
	}
	SettingSource::ConfigKey(key)
}
