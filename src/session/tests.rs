use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::*;
use crate::search::{INVALID_QUERY_MESSAGE, UNEXPECTED_ERROR_MESSAGE};

/// Backend that replays a fixed outcome and records the queries it saw.
struct ScriptedBackend {
	outcome: SearchOutcome,
	seen: Mutex<Vec<(SearchMode, String)>>,
}

impl ScriptedBackend {
	fn new(outcome: SearchOutcome) -> Self {
		Self {
			outcome,
			seen: Mutex::new(Vec::new()),
		}
	}

	fn calls(&self) -> usize {
		self.seen.lock().expect("lock").len()
	}
}

impl SearchBackend for ScriptedBackend {
	fn search(&self, mode: SearchMode, query: &str) -> SearchOutcome {
		self.seen
			.lock()
			.expect("lock")
			.push((mode, query.to_string()));
		self.outcome.clone()
	}
}

fn r(id: &str, score: f64) -> ResultItem {
	ResultItem::new(id, score, format!("text for {id}"))
}

#[test]
fn blank_queries_never_submit() {
	for mode in SearchMode::all() {
		for query in ["", "   ", "\t\n"] {
			let mut session = SearchSession::new(mode);
			session.on_query_change(query);
			let before = session.state().clone();
			let backend = ScriptedBackend::new(SearchOutcome::Success(Vec::new()));

			assert!(!session.can_submit());
			assert!(!session.submit_with(&backend));
			assert_eq!(backend.calls(), 0);
			assert_eq!(session.state(), &before);
			assert_eq!(session.phase(), SessionPhase::Idle);
		}
	}
}

#[test]
fn submit_clears_previous_error_and_results_before_settling() {
	let mut session = SearchSession::new(SearchMode::Dense);
	session.on_query_change("close games");
	let first = session.on_submit().expect("first request");
	session.apply_outcome(first.ticket, SearchOutcome::unexpected());
	assert_eq!(session.state().error.as_deref(), Some(UNEXPECTED_ERROR_MESSAGE));

	let second = session.on_submit().expect("second request");
	assert_eq!(second.ticket, first.ticket + 1);
	assert_eq!(session.phase(), SessionPhase::Loading);
	assert!(session.state().is_loading);
	assert!(session.state().error.is_none());
	assert!(session.state().results.is_empty());
}

#[test]
fn success_overwrites_earlier_results_and_errors() {
	for mode in SearchMode::all() {
		let mut session = SearchSession::new(mode);
		session.on_query_change("q");
		session.submit_with(&ScriptedBackend::new(SearchOutcome::Success(vec![r("old", 1.0)])));
		session.submit_with(&ScriptedBackend::new(SearchOutcome::ValidationError(
			"bad".into(),
		)));
		assert_eq!(session.phase(), SessionPhase::Failed);

		session.submit_with(&ScriptedBackend::new(SearchOutcome::Success(vec![
			r("r1", 0.8),
			r("r2", 0.3),
		])));

		assert_eq!(
			session.state(),
			&SearchState {
				query: "q".into(),
				results: vec![r("r1", 0.8), r("r2", 0.3)],
				is_loading: false,
				error: None,
				show_suggestions: false,
			}
		);
		assert_eq!(session.phase(), SessionPhase::Success);
	}
}

#[test]
fn validation_errors_clear_results() {
	let mut session = SearchSession::new(SearchMode::Sparse);
	session.on_query_change("an extremely long query");
	session.submit_with(&ScriptedBackend::new(SearchOutcome::ValidationError(
		"query too long".into(),
	)));

	let state = session.state();
	assert_eq!(state.error.as_deref(), Some("query too long"));
	assert!(state.results.is_empty());
	assert!(!state.is_loading);
}

#[test]
fn fallback_validation_message_is_never_empty() {
	let mut session = SearchSession::new(SearchMode::Hybrid);
	session.on_query_change("x");
	session.submit_with(&ScriptedBackend::new(SearchOutcome::ValidationError(
		INVALID_QUERY_MESSAGE.into(),
	)));
	assert_eq!(session.state().error.as_deref(), Some(INVALID_QUERY_MESSAGE));
}

#[test]
fn resubmitting_while_loading_is_a_no_op() {
	let mut session = SearchSession::new(SearchMode::Dense);
	session.on_query_change("close games");
	let request = session.on_submit().expect("request");
	let loading = session.state().clone();

	assert!(!session.can_submit());
	assert!(session.on_submit().is_none());
	session.on_query_change("something else");
	assert!(session.on_submit().is_none());
	assert!(session.state().is_loading);
	assert_eq!(session.state().results, loading.results);

	assert!(session.apply_outcome(request.ticket, SearchOutcome::Success(vec![r("a1", 0.92)])));
	assert!(session.can_submit());
}

#[test]
fn stale_tickets_are_ignored() {
	let mut session = SearchSession::new(SearchMode::Dense);
	session.on_query_change("q");
	let request = session.on_submit().expect("request");

	assert!(!session.apply_outcome(request.ticket + 10, SearchOutcome::unexpected()));
	assert!(session.state().is_loading);
	assert!(session.apply_outcome(request.ticket, SearchOutcome::Success(Vec::new())));
	assert!(!session.apply_outcome(request.ticket, SearchOutcome::unexpected()));
	assert!(session.state().error.is_none());
}

#[test]
fn query_edits_leave_results_alone() {
	let mut session = SearchSession::new(SearchMode::Dense);
	session.on_query_change("close games");
	session.submit_with(&ScriptedBackend::new(SearchOutcome::Success(vec![r("a1", 0.92)])));
	session.on_query_change("close games in march");

	assert_eq!(session.state().results, vec![r("a1", 0.92)]);
	assert_eq!(session.phase(), SessionPhase::Success);
}

#[test]
fn dense_scenario_shows_single_result() {
	let mut session = SearchSession::new(SearchMode::Dense);
	let backend = ScriptedBackend::new(SearchOutcome::Success(vec![ResultItem::new(
		"a1", 0.92, "...",
	)]));
	session.on_query_change("close games");
	assert!(session.submit_with(&backend));

	let seen = backend.seen.lock().expect("lock").clone();
	assert_eq!(seen, vec![(SearchMode::Dense, "close games".to_string())]);
	let state = session.state();
	assert_eq!(state.results.len(), 1);
	assert_eq!(state.results[0].score, 0.92);
	assert!(!state.is_loading);
	assert!(state.error.is_none());
}

#[test]
fn focus_shows_and_blur_hides_after_delay() {
	let start = Instant::now();
	let mut session = SearchSession::new(SearchMode::Dense);
	session.on_focus();
	assert!(session.state().show_suggestions);

	session.on_blur(start);
	assert!(session.state().show_suggestions);
	assert!(session.hide_pending());
	assert!(!session.tick(start + DEFAULT_HIDE_DELAY - Duration::from_millis(1)));
	assert!(session.state().show_suggestions);

	assert!(session.tick(start + DEFAULT_HIDE_DELAY));
	assert!(!session.state().show_suggestions);
	assert!(!session.hide_pending());
}

#[test]
fn refocusing_cancels_pending_hide() {
	let start = Instant::now();
	let mut session = SearchSession::new(SearchMode::Dense);
	session.on_focus();
	session.on_blur(start);
	session.on_focus();

	assert!(!session.tick(start + Duration::from_secs(1)));
	assert!(session.state().show_suggestions);
}

#[test]
fn suggestion_click_wins_over_delayed_blur() {
	let start = Instant::now();
	let mut session = SearchSession::new(SearchMode::Sparse);
	session.on_focus();
	session.on_query_change("typed");

	// Baseline ordering: focus leaves first, then the click lands in time.
	session.on_blur(start);
	session.on_suggestion_selected("Which games were close?");
	assert_eq!(session.state().query, "Which games were close?");
	assert!(!session.state().show_suggestions);

	assert!(!session.tick(start + DEFAULT_HIDE_DELAY));
	assert!(!session.state().show_suggestions);
	assert_eq!(session.phase(), SessionPhase::Idle);
	assert!(!session.state().is_loading);
}

#[test]
fn pointer_down_suppresses_pending_hide() {
	let start = Instant::now();
	let mut session = SearchSession::new(SearchMode::Dense).with_hide_delay(Duration::ZERO);
	session.on_focus();
	session.on_overlay_pointer_down();
	session.on_blur(start);

	assert!(!session.hide_pending());
	assert!(!session.tick(start + Duration::from_secs(5)));
	assert!(session.state().show_suggestions);

	session.on_suggestion_selected("Which games were hard?");
	assert!(!session.state().show_suggestions);
	assert_eq!(session.state().query, "Which games were hard?");
}

#[test]
fn cancelled_pointer_press_resumes_hide() {
	let start = Instant::now();
	let mut session = SearchSession::new(SearchMode::Dense);
	session.on_focus();
	session.on_blur(start);
	session.on_overlay_pointer_down();
	assert!(!session.hide_pending());

	let later = start + Duration::from_millis(500);
	session.on_overlay_pointer_cancel(later);
	assert!(session.hide_pending());
	assert!(session.tick(later + DEFAULT_HIDE_DELAY));
	assert!(!session.state().show_suggestions);
}

#[test]
fn handle_routes_events_and_only_submit_yields_requests() {
	let now = Instant::now();
	let mut session = SearchSession::new(SearchMode::Hybrid);
	assert!(session.handle(SessionEvent::Focus, now).is_none());
	assert!(
		session
			.handle(SessionEvent::SuggestionSelected("Find games where the home team won?".into()), now)
			.is_none()
	);
	let request = session
		.handle(SessionEvent::Submit, now)
		.expect("suggested query is submittable");
	assert_eq!(request.mode, SearchMode::Hybrid);
	assert_eq!(request.query, "Find games where the home team won?");
}
