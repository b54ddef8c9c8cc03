use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use super::App;
use super::components::{
	PromptContext, ResultsContext, StatusContext, render_prompt, render_results, render_trending,
};
use crate::catalog::FetchState;

const LOG_PANE_PERCENT: u16 = 40;

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let (main_area, log_area) = self.split_log_pane(area);
		let trending_height = u16::from(!self.trending.is_empty());
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(trending_height),
				Constraint::Min(1),
			])
			.split(main_area);

		let status_text = self.status_text();
		render_prompt(
			frame,
			PromptContext {
				search_input: &self.search_input,
				input_title: self.input_title.as_deref(),
				area: layout[0],
				theme: &self.theme,
			},
			StatusContext {
				status_text: &status_text,
				loading: self.fetch.is_loading(),
				throbber_state: &self.throbber_state,
			},
		);

		render_trending(frame, layout[1], &self.trending, &self.theme);

		render_results(
			frame,
			layout[2],
			&mut self.table_state,
			ResultsContext {
				fetch: &self.fetch,
				query: self.last_query.as_deref().unwrap_or(""),
				theme: &self.theme,
				throbber_state: &self.throbber_state,
			},
		);

		if let Some(log_area) = log_area {
			self.logs.render(frame, log_area, &self.theme);
		}
	}

	fn split_log_pane(&self, area: Rect) -> (Rect, Option<Rect>) {
		if !self.show_logs {
			return (area, None);
		}
		let [main, logs] = Layout::vertical([
			Constraint::Percentage(100 - LOG_PANE_PERCENT),
			Constraint::Percentage(LOG_PANE_PERCENT),
		])
		.areas(area);
		(main, Some(logs))
	}

	fn status_text(&self) -> String {
		match &self.fetch {
			FetchState::Success(movies) => match movies.len() {
				1 => "1 movie".to_string(),
				count => format!("{count} movies"),
			},
			FetchState::Idle | FetchState::Loading | FetchState::Empty(_) | FetchState::Failure(_) => {
				String::new()
			}
		}
	}
}
