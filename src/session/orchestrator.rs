use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::{DEFAULT_HIDE_DELAY, SearchSession, SearchState, SessionEvent};
use crate::search::{SearchMode, SearchRequest, Settlement};

/// Owns one [`SearchSession`] per mode and routes events to the active one.
///
/// Sessions are created eagerly and never reset; switching tabs only moves
/// `active`.
#[derive(Debug, Clone)]
pub struct TabOrchestrator {
	sessions: HashMap<SearchMode, SearchSession>,
	active: SearchMode,
}

impl Default for TabOrchestrator {
	fn default() -> Self {
		Self::new(SearchMode::all()[0])
	}
}

impl TabOrchestrator {
	pub fn new(active: SearchMode) -> Self {
		Self::with_hide_delay(active, DEFAULT_HIDE_DELAY)
	}

	pub fn with_hide_delay(active: SearchMode, hide_delay: Duration) -> Self {
		let sessions = SearchMode::all()
			.into_iter()
			.map(|mode| (mode, SearchSession::new(mode).with_hide_delay(hide_delay)))
			.collect();
		Self { sessions, active }
	}

	#[must_use]
	pub fn active_mode(&self) -> SearchMode {
		self.active
	}

	pub fn select_mode(&mut self, mode: SearchMode) {
		if self.active != mode {
			tracing::debug!(from = %self.active, to = %mode, "switching search mode");
			self.active = mode;
		}
	}

	pub fn next_mode(&mut self) {
		self.select_mode(self.active.next());
	}

	pub fn previous_mode(&mut self) {
		self.select_mode(self.active.previous());
	}

	/// Route `event` to the active session.
	pub fn dispatch(&mut self, event: SessionEvent, now: Instant) -> Option<SearchRequest> {
		self.active_session_mut().handle(event, now)
	}

	/// Apply a settlement to the mode that issued it, active or not.
	pub fn settle(&mut self, settlement: Settlement) -> bool {
		let Settlement {
			mode,
			ticket,
			outcome,
		} = settlement;
		self.session_mut(mode).apply_outcome(ticket, outcome)
	}

	/// Advance delayed hides in every session. Returns whether anything changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		let mut changed = false;
		for session in self.sessions.values_mut() {
			changed |= session.tick(now);
		}
		changed
	}

	#[must_use]
	pub fn active_state(&self) -> &SearchState {
		self.active_session().state()
	}

	#[must_use]
	pub fn active_session(&self) -> &SearchSession {
		self.session(self.active)
	}

	#[must_use]
	pub fn session(&self, mode: SearchMode) -> &SearchSession {
		&self.sessions[&mode]
	}

	fn active_session_mut(&mut self) -> &mut SearchSession {
		self.session_mut(self.active)
	}

	fn session_mut(&mut self, mode: SearchMode) -> &mut SearchSession {
		self.sessions
			.entry(mode)
			.or_insert_with(|| SearchSession::new(mode))
	}

	/// Whether any mode is still waiting on the backend.
	#[must_use]
	pub fn any_loading(&self) -> bool {
		self.sessions
			.values()
			.any(|session| session.state().is_loading)
	}
}
