//! Logging setup.
//!
//! Records go through the `log` facade into `tui-logger`'s buffer so they can
//! be shown in the in-app log pane without scribbling over the terminal UI.

use std::env;
use std::sync::Once;

use log::LevelFilter;

const LOG_LEVEL_ENV: &str = "MARQUEE_LOG";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

static INIT: Once = Once::new();

/// Install the logger. Safe to call repeatedly; only the first call has an
/// effect.
pub fn initialize() {
	INIT.call_once(|| {
		let level = env::var(LOG_LEVEL_ENV)
			.ok()
			.and_then(|value| parse_level(&value))
			.unwrap_or(DEFAULT_LEVEL);
		if tui_logger::init_logger(level).is_ok() {
			tui_logger::set_default_level(level);
		}
	});
}

/// Move buffered records into the widget's display buffer.
///
/// tui-logger 0.14 moves events on its own background thread (started by
/// `init_logger`), so there is nothing to do here.
pub fn pump() {}

fn parse_level(value: &str) -> Option<LevelFilter> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		return None;
	}
	trimmed.parse().ok()
}
