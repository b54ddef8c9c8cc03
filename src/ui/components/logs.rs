use log::LevelFilter;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetState};

use crate::ui::style::Theme;

/// Widget state for the toggleable log pane.
pub struct LogPane {
	state: TuiWidgetState,
}

impl LogPane {
	#[must_use]
	pub fn new() -> Self {
		let state = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
		Self { state }
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		crate::logging::pump();
		let widget = TuiLoggerWidget::default()
			.block(
				Block::default()
					.borders(Borders::TOP)
					.title(" Log ")
					.border_style(theme.empty_style())
					.title_style(theme.header_style()),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.style(theme.empty_style())
			.state(&self.state);
		frame.render_widget(widget, area);
	}
}

impl Default for LogPane {
	fn default() -> Self {
		Self::new()
	}
}
