use marquee::TrendingBackend;

use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let app = &config.app;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Catalog URL: {}", app.catalog.base_url),
		format!("  Image URL: {}", app.catalog.image_base_url),
		format!("  Catalog token: {}", mask(app.catalog.token.as_deref())),
		format!("  Request timeout: {}s", app.catalog.timeout.as_secs()),
		format!("  Debounce: {}ms", app.debounce.as_millis()),
		format!("  Trending limit: {}", app.trending.limit),
	];

	match &app.trending.backend {
		TrendingBackend::Memory => lines.push("  Trending store: in-memory".to_string()),
		TrendingBackend::Remote(remote) => {
			lines.push(format!("  Trending store: {}", remote.endpoint));
			lines.push(format!("  Trending project: {}", remote.project));
			lines.push(format!(
				"  Trending collection: {}/{}",
				remote.database, remote.collection
			));
			lines.push(format!(
				"  Trending API key: {}",
				mask(remote.api_key.as_deref())
			));
		}
	}

	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	if let Some(title) = &config.input_title {
		lines.push(format!("  Prompt title: {title}"));
	}
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines
}

fn mask(secret: Option<&str>) -> &'static str {
	match secret {
		Some(value) if !value.is_empty() => "(set)",
		_ => "(not set)",
	}
}
