use serde::Serialize;

use crate::search::{ResultItem, SearchMode};

/// How the interactive UI ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiOutcome {
	/// `true` when the user picked a result rather than cancelling.
	pub accepted: bool,
	pub mode: SearchMode,
	pub query: String,
	pub selection: Option<ResultItem>,
}

impl UiOutcome {
	#[must_use]
	pub fn is_accepted(&self) -> bool {
		self.accepted
	}
}
