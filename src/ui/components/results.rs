use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use super::highlight::{highlight_cell, match_indices};
use crate::catalog::{FetchState, Movie};
use crate::ui::style::Theme;

pub const NO_RESULTS_MESSAGE: &str = "No movies found";
const LOADING_LABEL: &str = " Loading movies…";
const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADERS: [&str; 5] = ["Title", "Year", "Rating", "Lang", "Popularity"];

/// Everything the results area needs for one frame.
pub struct ResultsContext<'a> {
	pub fetch: &'a FetchState,
	pub query: &'a str,
	pub theme: &'a Theme,
	pub throbber_state: &'a ThrobberState,
}

/// Render the results area for the current fetch state.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	context: ResultsContext<'_>,
) {
	let ResultsContext {
		fetch,
		query,
		theme,
		throbber_state,
	} = context;

	match fetch {
		FetchState::Idle | FetchState::Loading => {
			render_loading(frame, area, theme, throbber_state);
		}
		FetchState::Empty(message) | FetchState::Failure(message) => {
			render_message(frame, area, message, theme.error_style());
		}
		FetchState::Success(movies) if movies.is_empty() => {
			render_message(frame, area, NO_RESULTS_MESSAGE, theme.empty_style());
		}
		FetchState::Success(movies) => {
			render_table(frame, area, table_state, movies, query, theme);
		}
	}
}

fn render_loading(frame: &mut Frame, area: Rect, theme: &Theme, throbber_state: &ThrobberState) {
	let muted = theme.empty_style();
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled(LOADING_LABEL, muted),
	]);
	frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
	let paragraph = Paragraph::new(message.to_string())
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true })
		.style(style);
	frame.render_widget(paragraph, area);
}

fn column_constraints() -> [Constraint; 5] {
	[
		Constraint::Min(20),
		Constraint::Length(4),
		Constraint::Length(6),
		Constraint::Length(4),
		Constraint::Length(10),
	]
}

fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	movies: &[Movie],
	query: &str,
	theme: &Theme,
) {
	let highlight_spacing = HighlightSpacing::WhenSelected;
	let selection_width = selection_column_width(table_state, &highlight_spacing);
	let widths = column_constraints();
	let column_widths = resolve_column_widths(area, &widths, selection_width);
	let title_width = column_widths.first().copied();
	let rows = build_movie_rows(movies, query, title_width, theme);

	let header = Row::new(HEADERS.map(Cell::from))
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let table = Table::new(rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(highlight_spacing)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme);
}

/// One row per movie with the query highlighted in the title.
pub(crate) fn build_movie_rows<'a>(
	movies: &[Movie],
	query: &str,
	title_width: Option<u16>,
	theme: &Theme,
) -> Vec<Row<'a>> {
	movies
		.iter()
		.map(|movie| {
			let indices = match_indices(&movie.title, query);
			Row::new([
				highlight_cell(&movie.title, indices, title_width, theme.highlight_style()),
				Cell::from(movie.year().unwrap_or("-").to_string()),
				Cell::from(
					movie
						.vote_average
						.map(|rating| format!("{rating:.1}"))
						.unwrap_or_else(|| "-".to_string()),
				),
				Cell::from(
					movie
						.original_language
						.as_deref()
						.unwrap_or("-")
						.to_uppercase(),
				),
				Cell::from(format!("{:.1}", movie.popularity)),
			])
		})
		.collect()
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	const HEADER_HEIGHT: u16 = 1;
	if HEADER_HEIGHT >= area.height || area.width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + HEADER_HEIGHT,
		width: area.width,
		height: 1,
	};
	let base_style = Style::new().bg(theme.header_bg());
	let width = usize::from(area.width);
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)).style(base_style), sep_rect);
		return;
	}

	let middle_style = Style::new().bg(theme.header_bg()).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

fn selection_column_width(state: &TableState, spacing: &HighlightSpacing) -> u16 {
	let should_add = match spacing {
		HighlightSpacing::Always => true,
		HighlightSpacing::WhenSelected => state.selected().is_some(),
		HighlightSpacing::Never => false,
	};
	if should_add {
		HIGHLIGHT_SYMBOL.width() as u16
	} else {
		0
	}
}

fn resolve_column_widths(area: Rect, constraints: &[Constraint], selection_width: u16) -> Vec<u16> {
	let layout_area = Rect {
		x: 0,
		y: 0,
		width: area.width,
		height: 1,
	};
	let [_, columns_area] =
		Layout::horizontal([Constraint::Length(selection_width), Constraint::Fill(0)])
			.areas(layout_area);

	Layout::horizontal(constraints.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.iter()
		.map(|rect| rect.width)
		.collect()
}
