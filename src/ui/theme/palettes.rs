use ratatui::style::Color;

use super::{Palette, Theme};

pub const SLATE: Theme = Theme::from_palette(Palette {
	text: Color::Rgb(226, 232, 240),
	surface: Color::Rgb(15, 23, 42),
	selection: Color::Rgb(30, 41, 59),
	accent: Color::Rgb(250, 204, 21),
	prompt: Color::LightCyan,
	muted: Color::DarkGray,
	error: Color::Rgb(248, 113, 113),
});

pub const LIGHT: Theme = Theme::from_palette(Palette {
	text: Color::Rgb(15, 23, 42),
	surface: Color::Rgb(226, 232, 240),
	selection: Color::Rgb(203, 213, 225),
	accent: Color::Rgb(146, 64, 14),
	prompt: Color::Rgb(3, 105, 161),
	muted: Color::Rgb(100, 116, 139),
	error: Color::Rgb(185, 28, 28),
});

pub const SOLARIZED: Theme = Theme::from_palette(Palette {
	text: Color::Rgb(253, 246, 227),
	surface: Color::Rgb(7, 54, 66),
	selection: Color::Rgb(0, 43, 54),
	accent: Color::Rgb(181, 137, 0),
	prompt: Color::Rgb(38, 139, 210),
	muted: Color::Rgb(88, 110, 117),
	error: Color::Rgb(220, 50, 47),
});
