use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Cell;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Character positions in `text` covered by case-insensitive occurrences of
/// `needle`. Occurrences do not overlap.
#[must_use]
pub fn match_indices(text: &str, needle: &str) -> Option<Vec<usize>> {
	let needle: Vec<char> = needle.trim().chars().collect();
	if text.is_empty() || needle.is_empty() {
		return None;
	}

	let haystack: Vec<char> = text.chars().collect();
	let mut indices = Vec::new();
	let mut start = 0;
	while start + needle.len() <= haystack.len() {
		let window = &haystack[start..start + needle.len()];
		if window
			.iter()
			.zip(&needle)
			.all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
		{
			indices.extend(start..start + needle.len());
			start += needle.len();
		} else {
			start += 1;
		}
	}

	(!indices.is_empty()).then_some(indices)
}

/// Build a table cell that highlights the characters at `indices`, truncating
/// on the right to `max_width` columns.
pub(crate) fn highlight_cell<'a>(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: Option<u16>,
	highlight_style: Style,
) -> Cell<'a> {
	let (display_text, indices) = match max_width.map(usize::from) {
		Some(width) => truncate_with_highlight(text, indices, width),
		None => (text.to_string(), indices),
	};

	let Some(mut sorted_indices) = indices.filter(|indices| !indices.is_empty()) else {
		return Cell::from(display_text);
	};
	sorted_indices.sort_unstable();
	let mut next = sorted_indices.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();
	let style_for = |highlighted: bool| {
		if highlighted {
			highlight_style
		} else {
			Style::default()
		}
	};

	for (idx, ch) in display_text.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				spans.push(Span::styled(mem::take(&mut buffer), style_for(highlighted)));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}

	if !buffer.is_empty() {
		spans.push(Span::styled(buffer, style_for(highlighted)));
	}

	Cell::from(Text::from(Line::from(spans)))
}

fn truncate_with_highlight(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: usize,
) -> (String, Option<Vec<usize>>) {
	if max_width == 0 {
		return (String::new(), None);
	}
	if text.width() <= max_width {
		return (text.to_string(), indices);
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return (ELLIPSIS.to_string(), None);
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let limit = slice.chars().count();
	let mut truncated = slice.to_string();
	truncated.push_str(ELLIPSIS);
	let indices = indices.and_then(|indices| {
		let kept: Vec<usize> = indices.into_iter().filter(|&idx| idx < limit).collect();
		(!kept.is_empty()).then_some(kept)
	});
	(truncated, indices)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matches_ignore_case() {
		assert_eq!(match_indices("The Batman", "bat"), Some(vec![4, 5, 6]));
		assert_eq!(match_indices("BATMAN", "Man"), Some(vec![3, 4, 5]));
	}

	#[test]
	fn every_occurrence_is_marked() {
		assert_eq!(match_indices("Tora! Tora!", "tora"), Some(vec![0, 1, 2, 3, 6, 7, 8, 9]));
	}

	#[test]
	fn blank_or_missing_needle_yields_nothing() {
		assert_eq!(match_indices("Heat", ""), None);
		assert_eq!(match_indices("Heat", "   "), None);
		assert_eq!(match_indices("Heat", "cold"), None);
		assert_eq!(match_indices("", "heat"), None);
	}

	#[test]
	fn truncation_drops_hidden_indices() {
		let (text, indices) = truncate_with_highlight("abcdefgh", Some(vec![1, 3, 6]), 5);
		assert_eq!(text, "abcd…");
		assert_eq!(indices, Some(vec![1, 3]));
	}

	#[test]
	fn short_text_is_untouched() {
		let (text, indices) = truncate_with_highlight("Ronin", Some(vec![0]), 10);
		assert_eq!(text, "Ronin");
		assert_eq!(indices, Some(vec![0]));
	}
}
