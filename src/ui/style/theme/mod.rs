mod builtins;
mod registry;
mod types;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use registry::{by_name, default_theme, definitions, names};
pub use types::{Theme, ThemeDefinition};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
