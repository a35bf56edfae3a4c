use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::search::ResultItem;
use crate::session::SessionPhase;
use crate::ui::theme::Theme;

/// Argument bundle for the results pane.
pub struct ResultsContext<'a> {
	pub title: &'a str,
	pub results: &'a [ResultItem],
	pub phase: SessionPhase,
	pub focused: bool,
	pub area: Rect,
	pub theme: &'a Theme,
	pub throbber_state: &'a ThrobberState,
}

/// Render the results of the active mode, or its loading/empty placeholder.
pub fn render_results(frame: &mut Frame, context: ResultsContext<'_>, list_state: &mut ListState) {
	let ResultsContext {
		title,
		results,
		phase,
		focused,
		area,
		theme,
		throbber_state,
	} = context;

	let border_style = if focused {
		theme.header_style()
	} else {
		theme.empty_style()
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(border_style)
		.title(Span::styled(format!(" {title} "), theme.header_style()));
	let inner = block.inner(area);

	match phase {
		SessionPhase::Loading => {
			frame.render_widget(block, area);
			let spinner = Throbber::default()
				.style(theme.empty_style())
				.throbber_style(theme.empty_style());
			let line = Line::from(vec![
				spinner.to_symbol_span(throbber_state),
				Span::styled("Searching...", theme.empty_style()),
			]);
			frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
		}
		SessionPhase::Success if results.is_empty() => {
			frame.render_widget(block, area);
			frame.render_widget(
				Paragraph::new(Span::styled("No results", theme.empty_style()))
					.alignment(Alignment::Center),
				inner,
			);
		}
		_ if results.is_empty() => {
			frame.render_widget(block, area);
		}
		_ => {
			let width = inner.width.saturating_sub(1).max(1);
			let items: Vec<ListItem<'_>> = results
				.iter()
				.map(|item| ListItem::new(result_text(item, width, theme)))
				.collect();
			let list = List::new(items)
				.block(block)
				.highlight_style(theme.row_highlight_style())
				.highlight_symbol(" ");
			frame.render_stateful_widget(list, area, list_state);
		}
	}
}

fn result_text(item: &ResultItem, width: u16, theme: &Theme) -> Text<'static> {
	let label = theme.highlight_style();
	let mut lines = vec![
		Line::from(vec![Span::styled("ID: ", label), Span::raw(item.id.clone())]),
		Line::from(vec![
			Span::styled("Score: ", label),
			Span::raw(item.score.to_string()),
		]),
	];
	let prefix = "Text: ";
	let text_width = usize::from(width).saturating_sub(prefix.len()).max(1);
	let mut wrapped = textwrap::wrap(&item.text, text_width).into_iter();
	lines.push(Line::from(vec![
		Span::styled(prefix, label),
		Span::raw(wrapped.next().unwrap_or_default().into_owned()),
	]));
	let indent = " ".repeat(prefix.len());
	lines.extend(wrapped.map(|rest| Line::from(format!("{indent}{rest}"))));
	lines.push(Line::default());
	Text::from(lines)
}

#[cfg(test)]
mod tests {
	use ratatui::{Terminal, backend::TestBackend};

	use super::*;

	fn draw(results: &[ResultItem], phase: SessionPhase) -> String {
		let mut terminal = Terminal::new(TestBackend::new(40, 10)).expect("terminal");
		let theme = Theme::default();
		let throbber_state = ThrobberState::default();
		let mut list_state = ListState::default();
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_results(
					frame,
					ResultsContext {
						title: "Search Results",
						results,
						phase,
						focused: false,
						area,
						theme: &theme,
						throbber_state: &throbber_state,
					},
					&mut list_state,
				);
			})
			.expect("render frame");
		terminal.backend().to_string()
	}

	#[test]
	fn renders_id_score_and_text() {
		let rendered = draw(
			&[ResultItem::new("a1", 0.92, "close game in overtime")],
			SessionPhase::Success,
		);
		assert!(rendered.contains("Search Results"));
		assert!(rendered.contains("ID: a1"));
		assert!(rendered.contains("Score: 0.92"));
		assert!(rendered.contains("Text: close game in overtime"));
	}

	#[test]
	fn loading_shows_spinner_label() {
		let rendered = draw(&[], SessionPhase::Loading);
		assert!(rendered.contains("Searching..."));
		assert!(!rendered.contains("No results"));
	}

	#[test]
	fn empty_success_differs_from_idle() {
		assert!(draw(&[], SessionPhase::Success).contains("No results"));
		assert!(!draw(&[], SessionPhase::Idle).contains("No results"));
	}

	fn text_lines(text: &str, width: u16) -> Vec<String> {
		result_text(&ResultItem::new("a1", 1.0, text), width, &Theme::default())
			.lines
			.iter()
			.map(ToString::to_string)
			.collect()
	}

	#[test]
	fn wrap_prefers_word_boundaries_and_splits_long_words() {
		assert_eq!(
			text_lines("one two three", 13),
			vec!["ID: a1", "Score: 1", "Text: one two", "      three", ""]
		);
		assert_eq!(
			text_lines("abcdefgh", 9)[2..5],
			["Text: abc", "      def", "      gh"]
		);
		assert_eq!(text_lines("", 20)[2], "Text: ");
		assert_eq!(text_lines("a\nb", 20)[2..4], ["Text: a", "      b"]);
	}
}
