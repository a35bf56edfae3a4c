use serde::{Deserialize, Serialize};

/// A single ranked hit returned by the backend.
///
/// Scores are only comparable within one response; different modes use
/// different scales, so nothing here assumes a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
	#[serde(rename = "_id")]
	pub id: String,
	pub score: f64,
	#[serde(rename = "chunk_text")]
	pub text: String,
}

impl ResultItem {
	pub fn new(id: impl Into<String>, score: f64, text: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			score,
			text: text.into(),
		}
	}
}

/// Body of a successful search response.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultsPayload {
	pub(crate) results: Vec<ResultItem>,
}

/// Body of a 422 response. `detail` is kept loose so that a non-string value
/// falls back to the generic validation message rather than failing.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidationPayload {
	#[serde(default)]
	pub(crate) detail: Option<serde_json::Value>,
}

impl ValidationPayload {
	pub(crate) fn message(&self) -> Option<&str> {
		self.detail
			.as_ref()
			.and_then(serde_json::Value::as_str)
			.filter(|detail| !detail.is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wire_field_names_map_to_record() {
		let payload: ResultsPayload = serde_json::from_str(
			r#"{"results":[{"_id":"a1","score":0.92,"chunk_text":"close game"}]}"#,
		)
		.expect("payload parses");
		assert_eq!(payload.results, vec![ResultItem::new("a1", 0.92, "close game")]);
	}

	#[test]
	fn items_missing_fields_are_rejected() {
		let parsed =
			serde_json::from_str::<ResultsPayload>(r#"{"results":[{"_id":"a1","score":1}]}"#);
		assert!(parsed.is_err());
	}

	#[test]
	fn integer_scores_are_accepted() {
		let payload: ResultsPayload = serde_json::from_str(
			r#"{"results":[{"_id":"b","score":12,"chunk_text":"bm25 hit"}]}"#,
		)
		.expect("payload parses");
		assert_eq!(payload.results[0].score, 12.0);
	}

	#[test]
	fn non_string_detail_has_no_message() {
		let payload: ValidationPayload =
			serde_json::from_str(r#"{"detail":[{"loc":["query"]}]}"#).expect("parses");
		assert_eq!(payload.message(), None);
	}
}
