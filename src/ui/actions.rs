use std::time::Instant;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use super::components::{SuggestionOverlay, TabItem, button_hit, tab_at};
use super::outcome::UiOutcome;
use super::state::Focus;
use crate::session::SessionEvent;

impl App {
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<UiOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(self.outcome(false));
		}
		match key.code {
			KeyCode::Tab => {
				self.switch_mode(self.mode().next(), now);
				return None;
			}
			KeyCode::BackTab => {
				self.switch_mode(self.mode().previous(), now);
				return None;
			}
			_ => {}
		}
		match self.focus {
			Focus::Input => {
				self.handle_input_key(key, now);
				None
			}
			Focus::Results => self.handle_results_key(key, now),
		}
	}

	fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Enter => {
				if let Some(text) = self.highlighted_suggestion() {
					self.suggestion_cursor = None;
					self.tabs
						.dispatch(SessionEvent::SuggestionSelected(text), now);
				} else if self.tabs.active_session().can_submit() {
					self.blur_input(now);
					self.submit(now);
				}
			}
			KeyCode::Esc => self.blur_input(now),
			KeyCode::Up => self.move_suggestion_cursor(-1),
			KeyCode::Down => self.move_suggestion_cursor(1),
			KeyCode::Backspace => {
				let mut query = self.state().query.clone();
				if query.pop().is_some() {
					self.edit_query(query, now);
				}
			}
			KeyCode::Char('u') if ctrl => self.edit_query(String::new(), now),
			KeyCode::Char('w') if ctrl => {
				let query = delete_last_word(&self.state().query);
				self.edit_query(query, now);
			}
			KeyCode::Char(ch) if !ctrl => {
				let mut query = self.state().query.clone();
				query.push(ch);
				self.edit_query(query, now);
			}
			_ => {}
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent, now: Instant) -> Option<UiOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome(false)),
			KeyCode::Enter => return Some(self.outcome(true)),
			KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
			KeyCode::Char('/') | KeyCode::Char('i') => self.focus_input(now),
			_ => {}
		}
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.pointer_down(column, row, now),
			MouseEventKind::Up(MouseButton::Left) => self.pointer_up(column, row, now),
			MouseEventKind::ScrollDown if self.in_results(column, row) => self.move_selection(1),
			MouseEventKind::ScrollUp if self.in_results(column, row) => self.move_selection(-1),
			_ => {}
		}
	}

	fn pointer_down(&mut self, column: u16, row: u16, now: Instant) {
		if let Some(index) = self.suggestion_at(column, row) {
			// The press takes focus away from the input before the release
			// picks the entry.
			self.pressed_suggestion = Some(index);
			self.suggestion_cursor = Some(index);
			self.tabs.dispatch(SessionEvent::Blur, now);
			self.tabs.dispatch(SessionEvent::OverlayPointerDown, now);
			return;
		}

		let layout = self.layout;
		let position = Position::new(column, row);
		if button_hit(layout.input, column, row) {
			self.blur_input(now);
			self.submit(now);
		} else if layout.input.contains(position) {
			self.focus_input(now);
		} else if layout.tabs.contains(position) {
			if let Some(mode) = self.tab_under(column) {
				self.switch_mode(mode, now);
			}
		} else {
			self.blur_input(now);
		}
	}

	fn pointer_up(&mut self, column: u16, row: u16, now: Instant) {
		let Some(pressed) = self.pressed_suggestion.take() else {
			return;
		};
		let released_on = self.suggestion_at(column, row);
		match (released_on == Some(pressed))
			.then(|| self.ui.suggestions().get(pressed).cloned())
			.flatten()
		{
			Some(text) => {
				self.suggestion_cursor = None;
				self.focus = Focus::Input;
				self.tabs
					.dispatch(SessionEvent::SuggestionSelected(text), now);
			}
			None => {
				self.tabs
					.dispatch(SessionEvent::OverlayPointerCancel, now);
			}
		}
	}

	fn edit_query(&mut self, query: String, now: Instant) {
		self.tabs.dispatch(SessionEvent::QueryChanged(query), now);
	}

	pub(crate) fn focus_input(&mut self, now: Instant) {
		self.focus = Focus::Input;
		if !self.tabs.active_session().is_focused() {
			self.tabs.dispatch(SessionEvent::Focus, now);
		}
	}

	pub(crate) fn blur_input(&mut self, now: Instant) {
		self.focus = Focus::Results;
		self.suggestion_cursor = None;
		self.tabs.dispatch(SessionEvent::Blur, now);
	}

	fn highlighted_suggestion(&self) -> Option<String> {
		if !self.overlay_visible() {
			return None;
		}
		self.suggestion_cursor
			.and_then(|index| self.ui.suggestions().get(index))
			.cloned()
	}

	fn move_suggestion_cursor(&mut self, delta: isize) {
		let count = self.ui.suggestions().len();
		if !self.overlay_visible() || count == 0 {
			return;
		}
		self.suggestion_cursor = Some(match self.suggestion_cursor {
			None if delta < 0 => count - 1,
			None => 0,
			Some(index) => (index as isize + delta).rem_euclid(count as isize) as usize,
		});
	}

	fn move_selection(&mut self, delta: isize) {
		let len = self.state().results.len();
		if len == 0 {
			return;
		}
		let mode = self.mode();
		let state = self.list_state_mut(mode);
		let current = state.selected().unwrap_or(0) as isize;
		let next = (current + delta).clamp(0, len as isize - 1) as usize;
		state.select(Some(next));
	}

	fn suggestion_at(&self, column: u16, row: u16) -> Option<usize> {
		if !self.overlay_visible() {
			return None;
		}
		let area = self.layout.overlay?;
		SuggestionOverlay::hit_test(area, self.ui.suggestions().len(), column, row)
	}

	fn tab_under(&self, column: u16) -> Option<crate::search::SearchMode> {
		let items: Vec<TabItem<'_>> = self.tab_items();
		tab_at(self.layout.tabs, &self.ui.title, &items, column)
	}

	fn in_results(&self, column: u16, row: u16) -> bool {
		self.layout.results.contains(Position::new(column, row))
	}

	fn outcome(&self, accepted: bool) -> UiOutcome {
		let state = self.state();
		let selection = if accepted {
			self.selected_result()
				.and_then(|index| state.results.get(index))
				.cloned()
		} else {
			None
		};
		UiOutcome {
			accepted,
			mode: self.mode(),
			query: state.query.clone(),
			selection,
		}
	}
}

/// Drop the trailing word and any whitespace after it.
fn delete_last_word(text: &str) -> String {
	let trimmed = text.trim_end();
	match trimmed
		.char_indices()
		.rev()
		.find(|(_, ch)| ch.is_whitespace())
	{
		Some((index, ch)) => trimmed[..index + ch.len_utf8()].to_string(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::delete_last_word;

	#[test]
	fn delete_last_word_keeps_leading_words() {
		assert_eq!(delete_last_word("close games"), "close ");
		assert_eq!(delete_last_word("close games   "), "close ");
		assert_eq!(delete_last_word("single"), "");
		assert_eq!(delete_last_word(""), "");
	}
}
