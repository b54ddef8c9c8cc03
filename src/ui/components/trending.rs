use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::trending::TrendingRecord;
use crate::ui::style::Theme;

const LABEL: &str = "Trending ";

/// One line listing the trending terms in rank order: `1. Title  2. Title`.
///
/// Each entry shows the title of the representative movie, falling back to
/// the search term when no title was captured.
#[must_use]
pub fn trending_line<'a>(records: &[TrendingRecord], theme: &Theme) -> Line<'a> {
	let mut spans = vec![Span::styled(LABEL, theme.header_style())];
	for (index, record) in records.iter().enumerate() {
		if index > 0 {
			spans.push(Span::raw("  "));
		} else {
			spans.push(Span::raw(" "));
		}
		spans.push(Span::styled(format!("{}.", index + 1), theme.rank_style()));
		spans.push(Span::raw(format!(" {}", display_name(record))));
	}
	Line::from(spans)
}

/// Render the strip. Nothing is drawn when `records` is empty.
pub fn render_trending(frame: &mut Frame, area: Rect, records: &[TrendingRecord], theme: &Theme) {
	if records.is_empty() || area.height == 0 {
		return;
	}
	frame.render_widget(Paragraph::new(trending_line(records, theme)), area);
}

fn display_name(record: &TrendingRecord) -> &str {
	if record.title.trim().is_empty() {
		&record.search_term
	} else {
		&record.title
	}
}
