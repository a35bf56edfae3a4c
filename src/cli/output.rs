use anyhow::Result;
use serde_json::{Value, json};
use tabsearch::{ResultItem, SearchSession, SessionPhase, UiOutcome};

/// Print a plain-text representation of the interactive outcome.
pub(crate) fn print_plain(outcome: &UiOutcome) {
	if !outcome.is_accepted() {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(item) => println!("{}\t{}\t{}", item.id, item.score, item.text),
		None => println!("No selection"),
	}
}

/// Format the interactive outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &UiOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"mode": outcome.mode,
		"query": outcome.query,
		"selection": outcome.selection.as_ref().map(item_json),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the interactive outcome.
pub(crate) fn print_json(outcome: &UiOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Plain rendering of a settled one-shot session, mirroring the results pane.
pub(crate) fn format_search_plain(session: &SearchSession) -> String {
	let state = session.state();
	if let Some(message) = &state.error {
		return format!("Error: {message}");
	}
	if state.results.is_empty() {
		return "No results".to_string();
	}
	state
		.results
		.iter()
		.map(|item| format!("ID: {}\nScore: {}\nText: {}\n", item.id, item.score, item.text))
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn format_search_json(session: &SearchSession) -> Result<String> {
	let state = session.state();
	let payload = json!({
		"mode": session.mode(),
		"query": state.query,
		"outcome": phase_id(session.phase()),
		"results": state.results.iter().map(item_json).collect::<Vec<_>>(),
		"error": state.error,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

fn phase_id(phase: SessionPhase) -> &'static str {
	match phase {
		SessionPhase::Idle => "idle",
		SessionPhase::Loading => "loading",
		SessionPhase::Success => "success",
		SessionPhase::Failed => "error",
	}
}

fn item_json(item: &ResultItem) -> Value {
	json!({
		"id": item.id,
		"score": item.score,
		"text": item.text,
	})
}

#[cfg(test)]
mod tests {
	use tabsearch::{SearchBackend, SearchMode, SearchOutcome};

	use super::*;

	#[test]
	fn json_format_includes_selection() {
		let outcome = UiOutcome {
			accepted: true,
			mode: SearchMode::Sparse,
			query: "rookies".into(),
			selection: Some(ResultItem::new("s1", 3.5, "rookie of the year")),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["mode"], "sparse");
		assert_eq!(value["selection"]["id"], "s1");
		assert_eq!(value["selection"]["score"], 3.5);
	}

	#[test]
	fn cancelled_outcome_has_null_selection() {
		let outcome = UiOutcome {
			accepted: false,
			mode: SearchMode::Dense,
			query: String::new(),
			selection: None,
		};
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["selection"].is_null());
	}

	struct Fixed(SearchOutcome);

	impl SearchBackend for Fixed {
		fn search(&self, _mode: SearchMode, _query: &str) -> SearchOutcome {
			self.0.clone()
		}
	}

	fn settled(mode: SearchMode, query: &str, outcome: SearchOutcome) -> SearchSession {
		let mut session = SearchSession::new(mode);
		session.on_query_change(query);
		assert!(session.submit_with(&Fixed(outcome)));
		session
	}

	#[test]
	fn one_shot_plain_output() {
		let success = SearchOutcome::Success(vec![ResultItem::new("a1", 0.92, "close game")]);
		assert_eq!(
			format_search_plain(&settled(SearchMode::Dense, "q", success)),
			"ID: a1\nScore: 0.92\nText: close game\n"
		);
		assert_eq!(
			format_search_plain(&settled(SearchMode::Dense, "q", SearchOutcome::Success(Vec::new()))),
			"No results"
		);
		assert_eq!(
			format_search_plain(&settled(
				SearchMode::Dense,
				"q",
				SearchOutcome::ValidationError("too long".into())
			)),
			"Error: too long"
		);
	}

	#[test]
	fn one_shot_json_reports_phase_and_error() {
		let session = settled(SearchMode::Hybrid, "q", SearchOutcome::unexpected());
		let value: Value =
			serde_json::from_str(&format_search_json(&session).expect("json")).expect("parse");
		assert_eq!(value["mode"], "hybrid");
		assert_eq!(value["query"], "q");
		assert_eq!(value["outcome"], "error");
		assert_eq!(value["results"], json!([]));
		assert_eq!(value["error"], tabsearch::UNEXPECTED_ERROR_MESSAGE);
	}
}
