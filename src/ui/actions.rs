use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, SearchOutcome};

impl App<'_> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => {
				return Ok(Some(self.cancelled()));
			}
			KeyCode::Char('c') if ctrl => {
				return Ok(Some(self.cancelled()));
			}
			KeyCode::Char('l') if ctrl => {
				self.show_logs = !self.show_logs;
			}
			KeyCode::Enter => {
				return Ok(Some(SearchOutcome {
					accepted: true,
					query: self.search_input.text().to_string(),
					selection: self.selected_movie().cloned(),
					trending: self.trending().to_vec(),
				}));
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.debouncer.push(text, Instant::now());
				}
			}
		}
		Ok(None)
	}

	fn cancelled(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.search_input.text()).with_trending(self.trending().to_vec())
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.fetch.movies().len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}
