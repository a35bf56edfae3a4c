//! Core state container for the terminal front end.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use super::theme::Theme;
use crate::search::{SearchBackend, SearchDispatcher, SearchMode};
use crate::session::{SearchState, SessionEvent, TabOrchestrator};

/// Where key presses are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Input,
	Results,
}

/// Regions of the last drawn frame, kept for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScreenLayout {
	pub tabs: Rect,
	pub input: Rect,
	pub results: Rect,
	pub overlay: Option<Rect>,
}

/// Aggregate state shared across the terminal UI.
///
/// Per-mode search state lives in the [`TabOrchestrator`]; the `App` only adds
/// what the terminal needs on top of it: focus, list selections, spinner and
/// the geometry of the last frame.
pub struct App {
	pub(crate) tabs: TabOrchestrator,
	pub(crate) dispatcher: SearchDispatcher,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) focus: Focus,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) list_states: HashMap<SearchMode, ListState>,
	/// Keyboard highlight inside the suggestion overlay.
	pub(crate) suggestion_cursor: Option<usize>,
	/// Suggestion under a pointer press that has not been released yet.
	pub(crate) pressed_suggestion: Option<usize>,
	pub(crate) layout: ScreenLayout,
}

impl App {
	pub fn new(backend: Arc<dyn SearchBackend>, ui: UiConfig) -> Self {
		let start_mode = ui
			.tabs()
			.first()
			.map(|tab| tab.mode)
			.unwrap_or_default();
		let tabs = TabOrchestrator::with_hide_delay(start_mode, ui.hide_delay);
		let list_states = SearchMode::all()
			.into_iter()
			.map(|mode| (mode, ListState::default()))
			.collect();
		let mut app = Self {
			tabs,
			dispatcher: SearchDispatcher::new(backend),
			ui,
			theme: Theme::default(),
			focus: Focus::Input,
			throbber_state: ThrobberState::default(),
			list_states,
			suggestion_cursor: None,
			pressed_suggestion: None,
			layout: ScreenLayout::default(),
		};
		app.tabs.dispatch(SessionEvent::Focus, Instant::now());
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	#[must_use]
	pub fn mode(&self) -> SearchMode {
		self.tabs.active_mode()
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// State of the visible tab.
	#[must_use]
	pub fn state(&self) -> &SearchState {
		self.tabs.active_state()
	}

	/// Replace the active tab's query as if it had been typed.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.tabs
			.dispatch(SessionEvent::QueryChanged(query.into()), Instant::now());
	}

	/// Move to `mode`, carrying input focus over to its tab.
	pub fn set_mode(&mut self, mode: SearchMode) {
		self.switch_mode(mode, Instant::now());
	}

	pub(crate) fn switch_mode(&mut self, mode: SearchMode, now: Instant) {
		if mode == self.mode() {
			return;
		}
		self.tabs.dispatch(SessionEvent::Blur, now);
		self.tabs.select_mode(mode);
		self.suggestion_cursor = None;
		self.pressed_suggestion = None;
		if self.focus == Focus::Input {
			self.tabs.dispatch(SessionEvent::Focus, now);
		}
	}

	/// Whether the suggestion overlay of the active tab should be drawn.
	#[must_use]
	pub(crate) fn overlay_visible(&self) -> bool {
		self.state().show_suggestions && !self.ui.suggestions().is_empty()
	}

	pub(crate) fn list_state_mut(&mut self, mode: SearchMode) -> &mut ListState {
		self.list_states.entry(mode).or_default()
	}

	/// Index of the highlighted result in the active tab.
	#[must_use]
	pub(crate) fn selected_result(&self) -> Option<usize> {
		self.list_states
			.get(&self.mode())
			.and_then(ListState::selected)
			.filter(|index| *index < self.state().results.len())
	}

	/// Keep the active tab's list selection within its results.
	pub(crate) fn ensure_selection(&mut self, mode: SearchMode) {
		let len = self.tabs.session(mode).state().results.len();
		let state = self.list_state_mut(mode);
		if len == 0 {
			state.select(None);
		} else if state.selected().is_none_or(|selected| selected >= len) {
			state.select(Some(0));
		}
	}
}
