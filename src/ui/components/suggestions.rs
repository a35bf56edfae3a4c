use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Widget};

use crate::ui::theme::Theme;

/// Dropdown of example queries anchored under the query box.
///
/// The overlay is purely presentational. Whether it is visible is owned by
/// the session; picking an entry is reported back through
/// [`SuggestionOverlay::hit_test`].
pub struct SuggestionOverlay<'a> {
	suggestions: &'a [String],
	highlighted: Option<usize>,
	theme: &'a Theme,
}

impl<'a> SuggestionOverlay<'a> {
	#[must_use]
	pub fn new(suggestions: &'a [String], theme: &'a Theme) -> Self {
		Self {
			suggestions,
			highlighted: None,
			theme,
		}
	}

	#[must_use]
	pub fn highlighted(mut self, index: Option<usize>) -> Self {
		self.highlighted = index;
		self
	}

	/// Area the overlay takes when anchored below `input` inside `bounds`.
	///
	/// Returns `None` when there is nothing to show or no room to show it.
	#[must_use]
	pub fn area(input: Rect, bounds: Rect, count: usize) -> Option<Rect> {
		if count == 0 {
			return None;
		}
		let top = input.bottom();
		let available = bounds.bottom().saturating_sub(top);
		if available < 3 || input.width < 4 {
			return None;
		}
		let wanted = u16::try_from(count).unwrap_or(u16::MAX).saturating_add(2);
		Some(Rect {
			x: input.x,
			y: top,
			width: input.width,
			height: wanted.min(available),
		})
	}

	/// Index of the suggestion under `(column, row)`, if any.
	#[must_use]
	pub fn hit_test(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
		let inner = Block::default().borders(Borders::ALL).inner(area);
		if !inner.contains(Position::new(column, row)) {
			return None;
		}
		let index = usize::from(row - inner.y);
		(index < count).then_some(index)
	}
}

impl Widget for SuggestionOverlay<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		Clear.render(area, buf);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.empty_style());
		let inner = block.inner(area);
		block.render(area, buf);

		for (offset, suggestion) in self
			.suggestions
			.iter()
			.take(usize::from(inner.height))
			.enumerate()
		{
			let style = if self.highlighted == Some(offset) {
				self.theme.row_highlight_style()
			} else {
				ratatui::style::Style::default()
			};
			let y = inner.y + offset as u16;
			buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
			let line = Line::from(Span::styled(suggestion.as_str(), style));
			buf.set_line(inner.x, y, &line, inner.width);
		}
	}
}
