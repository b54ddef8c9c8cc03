use anyhow::Result;
use marquee::{MovieSearch, SearchOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search: MovieSearch,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			app,
			input_title,
			initial_query,
			theme,
		} = config;

		let mut search = MovieSearch::new(app);
		if let Some(title) = input_title {
			search = search.with_input_title(title);
		}
		if !initial_query.is_empty() {
			search = search.with_initial_query(initial_query);
		}
		if let Some(theme) = theme {
			search = search.with_theme_name(&theme);
		}

		Self { search }
	}

	pub(crate) fn run(self) -> Result<SearchOutcome> {
		self.search.run()
	}
}
