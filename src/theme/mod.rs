//! Colour themes shared by the table and chip widgets.

mod light;
mod slate;

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

pub use light::LIGHT;
pub use slate::SLATE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub selected: Style,
	pub placeholder: Style,
	pub highlight: Style,
	pub label: Style,
	pub avatar: Style,
	pub chip: Style,
	pub chip_selected: Style,
	pub status_active: Style,
	pub status_inactive: Style,
	pub status_pending: Style,
	pub status_unknown: Style,
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn placeholder_style(&self) -> Style {
		self.placeholder
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	/// Style for a chip badge, tinted with an explicit colour tag when given.
	#[must_use]
	pub fn tagged_chip_style(&self, tag: Option<Color>) -> Style {
		match tag {
			Some(color) => Style::new().fg(Color::Black).bg(color),
			None => self.chip,
		}
	}

	/// Style for a chip in the multi-select row.
	#[must_use]
	pub fn choice_style(&self, selected: bool, focused: bool) -> Style {
		let base = if selected { self.chip_selected } else { self.chip };
		if focused {
			base.add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
		} else {
			base
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

/// Built-in theme bundled with the crate.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "slate";

const BUILT_IN: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "slate",
		theme: SLATE,
		aliases: &["dark", "default"],
	},
	ThemeDefinition {
		name: "light",
		theme: LIGHT,
		aliases: &["day"],
	},
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
	#[error("unknown theme '{name}' (available: {available})")]
	Unknown { name: String, available: String },
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILT_IN
		.iter()
		.find(|definition| {
			definition.name == wanted || definition.aliases.iter().any(|alias| *alias == wanted)
		})
		.map(|definition| definition.theme)
}

/// Resolve an optional theme name, falling back to the default theme.
pub fn resolve(name: Option<&str>) -> Result<Theme, ThemeError> {
	match name {
		None => Ok(Theme::default()),
		Some(name) => by_name(name).ok_or_else(|| ThemeError::Unknown {
			name: name.to_owned(),
			available: names().join(", "),
		}),
	}
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN.iter().map(|definition| definition.name).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case_and_accepts_aliases() {
		assert_eq!(by_name("LIGHT"), Some(LIGHT));
		assert_eq!(by_name(" dark "), Some(SLATE));
		assert_eq!(by_name("missing"), None);
	}

	#[test]
	fn resolve_reports_available_names() {
		let err = resolve(Some("neon")).unwrap_err();
		assert_eq!(err.to_string(), "unknown theme 'neon' (available: slate, light)");
		assert_eq!(resolve(None), Ok(SLATE));
	}
}
