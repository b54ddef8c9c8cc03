use marquee::AppConfig;

mod errors;
mod summary;

pub(crate) use errors::{SettingSource, SettingsError};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedConfig {
	pub(crate) app: AppConfig,
	pub(crate) input_title: Option<String>,
	pub(crate) initial_query: String,
	pub(crate) theme: Option<String>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		for line in summary::summary_lines(self) {
			println!("{line}");
		}
	}
}
