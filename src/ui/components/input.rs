use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

const BUTTON_LABEL: &str = "[ Search ]";

/// Argument bundle for the query box.
pub struct InputContext<'a> {
	pub query: &'a str,
	pub placeholder: &'a str,
	pub focused: bool,
	pub can_submit: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the bordered query box with the submit button on its right edge.
pub fn render_input(frame: &mut Frame, context: InputContext<'_>) {
	let InputContext {
		query,
		placeholder,
		focused,
		can_submit,
		area,
		theme,
	} = context;

	let border_style = if focused {
		theme.header_style()
	} else {
		theme.empty_style()
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(border_style);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	let (text_area, button_area) = split_input(inner);

	let line = if query.is_empty() {
		Line::from(Span::styled(placeholder.to_string(), theme.empty_style()))
	} else {
		Line::from(visible_tail(query, text_area.width.saturating_sub(1)).to_string())
	};
	frame.render_widget(Paragraph::new(line), text_area);

	if let Some(button_area) = button_area {
		let style = if can_submit {
			theme.prompt_style()
		} else {
			theme.disabled_style()
		};
		frame.render_widget(Paragraph::new(Span::styled(BUTTON_LABEL, style)), button_area);
	}

	if focused {
		let shown = visible_tail(query, text_area.width.saturating_sub(1));
		let x = text_area
			.x
			.saturating_add(shown.width() as u16)
			.min(text_area.right().saturating_sub(1));
		frame.set_cursor_position(Position::new(x, text_area.y));
	}
}

/// Whether `(column, row)` lands on the submit button of an input drawn in `area`.
#[must_use]
pub fn button_hit(area: Rect, column: u16, row: u16) -> bool {
	let inner = Block::default().borders(Borders::ALL).inner(area);
	match split_input(inner).1 {
		Some(button) => button.contains(Position::new(column, row)),
		None => false,
	}
}

fn split_input(inner: Rect) -> (Rect, Option<Rect>) {
	let button_width = BUTTON_LABEL.width() as u16;
	// Keep at least a few cells for typing before giving room to the button.
	if inner.width <= button_width + 4 {
		return (inner, None);
	}
	let text = Rect {
		width: inner.width - button_width - 1,
		height: 1,
		..inner
	};
	let button = Rect {
		x: inner.right() - button_width,
		width: button_width,
		height: 1,
		..inner
	};
	(text, Some(button))
}

/// Longest suffix of `text` that fits in `width` cells.
fn visible_tail(text: &str, width: u16) -> &str {
	let width = usize::from(width);
	if text.width() <= width {
		return text;
	}
	let mut start = text.len();
	let mut used = 0;
	for (index, ch) in text.char_indices().rev() {
		let cells = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
		if used + cells > width {
			break;
		}
		used += cells;
		start = index;
	}
	&text[start..]
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;

	fn draw(query: &str, can_submit: bool) -> Terminal<TestBackend> {
		let mut terminal = Terminal::new(TestBackend::new(40, 3)).expect("terminal");
		let theme = Theme::default();
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_input(
					frame,
					InputContext {
						query,
						placeholder: "Enter your search query...",
						focused: true,
						can_submit,
						area,
						theme: &theme,
					},
				);
			})
			.expect("render frame");
		terminal
	}

	fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
		let buffer = terminal.backend().buffer();
		(0..buffer.area.width)
			.map(|x| buffer[(x, y)].symbol().to_string())
			.collect()
	}

	#[test]
	fn shows_placeholder_until_typed() {
		let terminal = draw("", false);
		assert!(row(&terminal, 1).contains("Enter your search"));
		assert!(row(&terminal, 1).contains(BUTTON_LABEL));

		let terminal = draw("close games", true);
		let line = row(&terminal, 1);
		assert!(line.contains("close games"));
		assert!(!line.contains("Enter your"));
	}

	#[test]
	fn disabled_button_is_dimmed() {
		let theme = Theme::default();
		let terminal = draw("", false);
		let buffer = terminal.backend().buffer();
		let x = 40 - 1 - BUTTON_LABEL.len() as u16;
		assert_eq!(buffer[(x, 1)].symbol(), "[");
		assert_eq!(buffer[(x, 1)].style().add_modifier, theme.disabled_style().add_modifier);
	}

	#[test]
	fn button_hit_matches_drawn_position() {
		let area = Rect::new(0, 0, 40, 3);
		assert!(button_hit(area, 38, 1));
		assert!(button_hit(area, 29, 1));
		assert!(!button_hit(area, 28, 1));
		assert!(!button_hit(area, 38, 0));
		assert!(!button_hit(Rect::new(0, 0, 10, 3), 8, 1));
	}

	#[test]
	fn long_queries_keep_their_tail_visible() {
		assert_eq!(visible_tail("abcdef", 3), "def");
		assert_eq!(visible_tail("abc", 10), "abc");
	}
}
