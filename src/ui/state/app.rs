//! Core state container for the terminal front-end.

use std::sync::mpsc::{Receiver, Sender};

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::SearchRuntime;
use crate::catalog::{FetchState, Movie, MovieCatalog, QueryService};
use crate::config::AppConfig;
use crate::debounce::Debouncer;
use crate::search;
use crate::trending::{self, TrendingCommand, TrendingRecord, TrendingStore, TrendingUpdate};
use crate::ui::components::LogPane;
use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.search.shutdown();
		let _ = self.trending_commands.send(TrendingCommand::Shutdown);
	}
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the query editor, the debouncer feeding the search worker,
/// the current [`FetchState`] and the trending list loaded at startup. The
/// catalog and trending store live on their own worker threads and are only
/// reached through channels.
pub struct App<'a> {
	pub search_input: SearchInput<'a>,
	pub table_state: TableState,
	pub theme: Theme,
	pub(crate) input_title: Option<String>,
	pub(crate) fetch: FetchState,
	pub(crate) trending: Vec<TrendingRecord>,
	pub(crate) debouncer: Debouncer,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) show_logs: bool,
	pub(crate) logs: LogPane,
	pub(in crate::ui) search: SearchRuntime,
	pub(in crate::ui) trending_updates: Receiver<TrendingUpdate>,
	trending_commands: Sender<TrendingCommand>,
	/// Last query handed to the search worker.
	pub(in crate::ui) last_query: Option<String>,
}

impl<'a> App<'a> {
	/// Start the search and trending workers and request the trending list.
	///
	/// The empty initial query is released on the first tick, which loads the
	/// discover listing.
	pub fn new<C>(config: &AppConfig, catalog: C, store: Box<dyn TrendingStore>) -> Self
	where
		C: MovieCatalog + 'static,
	{
		crate::logging::initialize();

		let (trending_commands, trending_updates) = trending::spawn(store);
		let limit = config.trending.limit;
		if trending_commands
			.send(TrendingCommand::LoadTop { limit })
			.is_err()
		{
			log::warn!("trending worker exited before loading the top {limit} terms");
		}

		let service = QueryService::new(catalog, config.catalog.image_base_url.clone());
		let (search_tx, search_rx, latest_query_id) =
			search::spawn(service, Some(trending_commands.clone()));

		let theme = Theme::default();
		let mut search_input = SearchInput::new("");
		search_input.set_placeholder_style(theme.empty_style());

		Self {
			search_input,
			table_state: TableState::default(),
			theme,
			input_title: None,
			fetch: FetchState::Idle,
			trending: Vec::new(),
			debouncer: Debouncer::new(config.debounce, ""),
			throbber_state: ThrobberState::default(),
			show_logs: false,
			logs: LogPane::new(),
			search: SearchRuntime::new(search_tx, search_rx, latest_query_id),
			trending_updates,
			trending_commands,
			last_query: None,
		}
	}

	/// Pre-fill the prompt. The text is searched on the next tick without
	/// waiting for the debounce window.
	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		self.search_input = SearchInput::new(query.clone());
		self.search_input
			.set_placeholder_style(self.theme.empty_style());
		self.debouncer = Debouncer::new(self.debouncer.window(), query);
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_placeholder_style(theme.empty_style());
	}

	pub fn set_input_title(&mut self, title: impl Into<String>) {
		self.input_title = Some(title.into());
	}

	#[must_use]
	pub fn fetch_state(&self) -> &FetchState {
		&self.fetch
	}

	/// Trending records in rank order.
	#[must_use]
	pub fn trending(&self) -> &[TrendingRecord] {
		&self.trending
	}

	pub(crate) fn selected_movie(&self) -> Option<&Movie> {
		let selected = self.table_state.selected()?;
		self.fetch.movies().get(selected)
	}

	/// Keep the row selection inside the current movie list.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.fetch.movies().len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}
}
