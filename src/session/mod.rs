//! Per-mode search state and the transitions that drive it.
//!
//! A [`SearchSession`] never performs I/O itself. Submitting yields a
//! [`SearchRequest`] for the caller to run; the caller later feeds the
//! classified outcome back through [`SearchSession::apply_outcome`]. Timing
//! (the delayed suggestion hide) is driven by explicit `now` instants so that
//! it can be tested without sleeping.

mod orchestrator;
#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

pub use orchestrator::TabOrchestrator;

use crate::search::{ResultItem, SearchBackend, SearchMode, SearchOutcome, SearchRequest};

/// How long the overlay survives the input losing focus.
///
/// Must outlive a click on a suggestion so the click's selection is applied
/// before the overlay disappears underneath it.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Everything a mode's tab renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
	pub query: String,
	pub results: Vec<ResultItem>,
	pub is_loading: bool,
	pub error: Option<String>,
	pub show_suggestions: bool,
}

/// Request lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
	/// Nothing submitted yet.
	#[default]
	Idle,
	Loading,
	Success,
	Failed,
}

/// User interactions a session understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
	QueryChanged(String),
	Focus,
	Blur,
	/// Pointer pressed inside the suggestion overlay.
	OverlayPointerDown,
	/// Pointer released somewhere other than a suggestion.
	OverlayPointerCancel,
	SuggestionSelected(String),
	Submit,
}

/// Isolated state machine for one [`SearchMode`].
#[derive(Debug, Clone)]
pub struct SearchSession {
	mode: SearchMode,
	state: SearchState,
	phase: SessionPhase,
	focused: bool,
	hide_delay: Duration,
	pending_hide: Option<Instant>,
	hide_suppressed: bool,
	last_ticket: u64,
	in_flight: Option<u64>,
}

impl SearchSession {
	pub fn new(mode: SearchMode) -> Self {
		Self {
			mode,
			state: SearchState::default(),
			phase: SessionPhase::Idle,
			focused: false,
			hide_delay: DEFAULT_HIDE_DELAY,
			pending_hide: None,
			hide_suppressed: false,
			last_ticket: 0,
			in_flight: None,
		}
	}

	#[must_use]
	pub fn with_hide_delay(mut self, delay: Duration) -> Self {
		self.hide_delay = delay;
		self
	}

	#[must_use]
	pub fn mode(&self) -> SearchMode {
		self.mode
	}

	#[must_use]
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	#[must_use]
	pub fn phase(&self) -> SessionPhase {
		self.phase
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Whether a delayed hide is waiting for [`SearchSession::tick`].
	#[must_use]
	pub fn hide_pending(&self) -> bool {
		self.pending_hide.is_some()
	}

	/// Submit is enabled only outside `Loading` and with a non-blank query.
	#[must_use]
	pub fn can_submit(&self) -> bool {
		self.phase != SessionPhase::Loading && !self.state.query.trim().is_empty()
	}

	/// Apply `event`, returning a request when it starts a search.
	pub fn handle(&mut self, event: SessionEvent, now: Instant) -> Option<SearchRequest> {
		match event {
			SessionEvent::QueryChanged(text) => self.on_query_change(text),
			SessionEvent::Focus => self.on_focus(),
			SessionEvent::Blur => self.on_blur(now),
			SessionEvent::OverlayPointerDown => self.on_overlay_pointer_down(),
			SessionEvent::OverlayPointerCancel => self.on_overlay_pointer_cancel(now),
			SessionEvent::SuggestionSelected(text) => self.on_suggestion_selected(text),
			SessionEvent::Submit => return self.on_submit(),
		}
		None
	}

	pub fn on_query_change(&mut self, text: impl Into<String>) {
		self.state.query = text.into();
	}

	pub fn on_focus(&mut self) {
		self.focused = true;
		self.state.show_suggestions = true;
		self.pending_hide = None;
		self.hide_suppressed = false;
	}

	pub fn on_blur(&mut self, now: Instant) {
		self.focused = false;
		if self.hide_suppressed || !self.state.show_suggestions {
			return;
		}
		self.pending_hide = Some(now + self.hide_delay);
	}

	/// Hold the overlay open until the pointer is released.
	pub fn on_overlay_pointer_down(&mut self) {
		self.hide_suppressed = true;
		self.pending_hide = None;
	}

	/// The pointer left the overlay without picking anything.
	pub fn on_overlay_pointer_cancel(&mut self, now: Instant) {
		if !self.hide_suppressed {
			return;
		}
		self.hide_suppressed = false;
		if !self.focused && self.state.show_suggestions {
			self.pending_hide = Some(now + self.hide_delay);
		}
	}

	/// Commit a suggestion as the query. Does not submit.
	pub fn on_suggestion_selected(&mut self, text: impl Into<String>) {
		self.state.query = text.into();
		self.state.show_suggestions = false;
		self.pending_hide = None;
		self.hide_suppressed = false;
	}

	/// Apply a delayed hide whose deadline has passed. Returns whether the
	/// overlay changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		match self.pending_hide {
			Some(deadline) if deadline <= now => {
				self.pending_hide = None;
				let was_shown = self.state.show_suggestions;
				self.state.show_suggestions = false;
				was_shown
			}
			_ => false,
		}
	}

	/// Start a search for the current query.
	///
	/// A no-op returning `None` while loading or when the trimmed query is
	/// empty. Otherwise the previous error and results are cleared before the
	/// request is handed out, so they can never be mistaken for its answer.
	pub fn on_submit(&mut self) -> Option<SearchRequest> {
		if !self.can_submit() {
			return None;
		}

		self.state.error = None;
		self.state.results.clear();
		self.state.is_loading = true;
		self.phase = SessionPhase::Loading;

		self.last_ticket = self.last_ticket.wrapping_add(1);
		self.in_flight = Some(self.last_ticket);

		Some(SearchRequest {
			mode: self.mode,
			query: self.state.query.clone(),
			ticket: self.last_ticket,
		})
	}

	/// Apply the settlement of the request identified by `ticket`.
	///
	/// Returns `false` when no such request is in flight.
	pub fn apply_outcome(&mut self, ticket: u64, outcome: SearchOutcome) -> bool {
		if self.in_flight != Some(ticket) {
			tracing::debug!(mode = %self.mode, ticket, "ignoring settlement for stale request");
			return false;
		}
		self.in_flight = None;
		self.state.is_loading = false;

		match outcome {
			SearchOutcome::Success(results) => {
				self.state.results = results;
				self.phase = SessionPhase::Success;
			}
			SearchOutcome::ValidationError(message) | SearchOutcome::UnexpectedError(message) => {
				self.state.error = Some(message);
				self.state.results.clear();
				self.phase = SessionPhase::Failed;
			}
		}
		true
	}

	/// Submit and settle inline against `backend`. Returns whether a request
	/// was actually made.
	pub fn submit_with(&mut self, backend: &dyn SearchBackend) -> bool {
		let Some(request) = self.on_submit() else {
			return false;
		};
		let outcome = backend.search(request.mode, &request.query);
		self.apply_outcome(request.ticket, outcome)
	}
}
