use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

const DEFAULT_PROMPT: &str = "Movies";

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub input_title: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Right-aligned status shown inside the input area.
pub struct StatusContext<'a> {
	pub status_text: &'a str,
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt title, the query editor and the status indicator.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, status: StatusContext<'_>) {
	let PromptContext {
		search_input,
		input_title,
		area,
		theme,
	} = prompt;

	let title = determine_prompt_text(input_title);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(layout_constraints(calculate_prompt_width(title)))
		.split(area);

	let prompt_widget = Paragraph::new(format!("{title} > ")).style(theme.prompt_style());
	frame.render_widget(prompt_widget, horizontal[0]);

	let input_area = horizontal[1];
	search_input.render_textarea(frame, input_area);
	render_status(frame, input_area, status, theme);
}

fn determine_prompt_text(input_title: Option<&str>) -> &str {
	input_title
		.filter(|title| !title.trim().is_empty())
		.unwrap_or(DEFAULT_PROMPT)
}

fn calculate_prompt_width(prompt: &str) -> u16 {
	u16::try_from(prompt.width())
		.unwrap_or(u16::MAX)
		.saturating_add(3)
}

fn layout_constraints(prompt_width: u16) -> [Constraint; 2] {
	[Constraint::Length(prompt_width), Constraint::Min(1)]
}

fn status_line<'a>(status: &StatusContext<'_>, theme: &Theme) -> Line<'a> {
	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if status.loading {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(status.throbber_state));
	}
	if !status.status_text.is_empty() {
		line.spans
			.push(Span::styled(status.status_text.to_string(), muted_style));
	}
	line
}

fn render_status(frame: &mut Frame, area: Rect, status: StatusContext<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let line = status_line(&status, theme);
	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	// Keep two columns between the query text and the status.
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, input_row, &line, max_width);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	#[test]
	fn prompt_prefers_explicit_title() {
		assert_eq!(determine_prompt_text(Some("Films")), "Films");
	}

	#[test]
	fn prompt_falls_back_to_default_title() {
		assert_eq!(determine_prompt_text(None), DEFAULT_PROMPT);
		assert_eq!(determine_prompt_text(Some("  ")), DEFAULT_PROMPT);
	}

	#[test]
	fn prompt_width_accounts_for_separator() {
		assert_eq!(calculate_prompt_width("Prompt"), 9);
	}

	#[test]
	fn layout_reserves_prompt_columns() {
		assert_eq!(
			layout_constraints(9),
			[Constraint::Length(9), Constraint::Min(1)]
		);
	}

	#[test]
	fn status_text_is_right_aligned() {
		let input = SearchInput::new("dune");
		let theme = Theme::default();
		let throbber = ThrobberState::default();
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();

		terminal
			.draw(|frame| {
				let area = frame.area();
				render_prompt(
					frame,
					PromptContext {
						search_input: &input,
						input_title: Some("Find"),
						area,
						theme: &theme,
					},
					StatusContext {
						status_text: "3 movies",
						loading: false,
						throbber_state: &throbber,
					},
				);
			})
			.unwrap();

		let row: String = terminal
			.backend()
			.buffer()
			.content()
			.iter()
			.map(|cell| cell.symbol())
			.collect();
		assert!(row.starts_with("Find > dune"), "row was {row:?}");
		assert!(row.ends_with("3 movies"), "row was {row:?}");
	}
}
