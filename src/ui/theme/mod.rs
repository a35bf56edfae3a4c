mod palettes;

use ratatui::style::{Color, Modifier, Style};

pub use palettes::{LIGHT, SLATE, SOLARIZED};

/// Seven colours a built-in theme is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
	pub text: Color,
	pub surface: Color,
	pub selection: Color,
	pub accent: Color,
	pub prompt: Color,
	pub muted: Color,
	pub error: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub error: Style,
}

impl Theme {
	/// Derive every widget style from `palette`.
	#[must_use]
	pub const fn from_palette(palette: Palette) -> Self {
		Self {
			header: Style::new().fg(palette.text).bg(palette.surface),
			row_highlight: Style::new().fg(palette.accent).bg(palette.selection),
			prompt: Style::new().fg(palette.prompt),
			empty: Style::new().fg(palette.muted),
			highlight: Style::new().fg(palette.accent).add_modifier(Modifier::BOLD),
			error: Style::new().fg(palette.error).add_modifier(Modifier::BOLD),
		}
	}

	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn row_highlight_bg(&self) -> Color {
		self.row_highlight.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header_fg())
			.bg(self.row_highlight_bg())
	}

	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new().bg(self.header_bg())
	}

	/// Style for controls that cannot currently be used.
	#[must_use]
	pub fn disabled_style(&self) -> Style {
		self.empty.add_modifier(Modifier::DIM)
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

const BUILTINS: &[(&str, Theme)] = &[
	("slate", SLATE),
	("light", LIGHT),
	("solarized", SOLARIZED),
];

/// Look up a built-in theme; `default` is an alias for slate.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim().to_ascii_lowercase();
	if normalized == "default" {
		return Some(Theme::default());
	}
	BUILTINS
		.iter()
		.find(|(builtin, _)| *builtin == normalized)
		.map(|(_, theme)| *theme)
}

/// Names of the built-in themes, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = BUILTINS.iter().map(|(name, _)| *name).collect();
	names.sort_unstable();
	names
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_insensitive_and_knows_default() {
		assert_eq!(by_name(" Light "), Some(LIGHT));
		assert_eq!(by_name("default"), Some(SLATE));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn errors_stand_apart_from_highlights() {
		for name in names() {
			let theme = by_name(name).expect("builtin");
			assert_ne!(theme.error_style().fg, theme.highlight_style().fg, "{name}");
			assert_ne!(theme.error_style().fg, theme.empty_style().fg, "{name}");
			assert!(theme.error_style().add_modifier.contains(Modifier::BOLD));
		}
	}

	#[test]
	fn names_are_sorted() {
		assert_eq!(names(), vec!["light", "slate", "solarized"]);
	}
}
