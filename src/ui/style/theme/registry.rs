use super::builtins::{BUILT_IN, SLATE};
use super::types::{Theme, ThemeDefinition};

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look up a built-in theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_IN
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes, default first.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN.iter().map(|definition| definition.name).collect()
}

#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
	BUILT_IN
}
