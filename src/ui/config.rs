use std::collections::HashMap;
use std::time::Duration;

use crate::search::SearchMode;
use crate::session::DEFAULT_HIDE_DELAY;

/// Example queries offered before the user types their own.
pub const DEFAULT_SUGGESTIONS: [&str; 6] = [
	"Which games were close?",
	"Which games were competitive?",
	"Which games were hard?",
	"Find games where the home team won?",
	"Who are the strong players for Minnesota Timberwolves?",
	"Find games where rookie players performed well?",
];

/// Label for one mode's tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabUiConfig {
	pub mode: SearchMode,
	pub tab_label: String,
}

impl TabUiConfig {
	#[must_use]
	pub fn new(mode: SearchMode, tab_label: impl Into<String>) -> Self {
		Self {
			mode,
			tab_label: tab_label.into(),
		}
	}
}

/// Text and timing used by the UI.
#[derive(Debug, Clone)]
pub struct UiConfig {
	pub title: String,
	pub placeholder: String,
	pub results_title: String,
	pub hide_delay: Duration,
	suggestions: Vec<String>,
	tabs: Vec<TabUiConfig>,
	index: HashMap<SearchMode, usize>,
}

impl Default for UiConfig {
	fn default() -> Self {
		let mut config = Self {
			title: "Search".to_string(),
			placeholder: "Enter your search query...".to_string(),
			results_title: "Search Results".to_string(),
			hide_delay: DEFAULT_HIDE_DELAY,
			suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
			tabs: Vec::new(),
			index: HashMap::new(),
		};
		for mode in SearchMode::all() {
			config.register_tab(TabUiConfig::new(mode, mode.default_label()));
		}
		config
	}
}

impl UiConfig {
	/// Register a tab definition, replacing any existing one for the same mode.
	pub fn register_tab(&mut self, tab: TabUiConfig) {
		let mode = tab.mode;
		if let Some(position) = self.index.get(&mode).copied() {
			self.tabs[position] = tab;
		} else {
			let idx = self.tabs.len();
			self.index.insert(mode, idx);
			self.tabs.push(tab);
		}
	}

	/// Return all registered tabs in display order.
	#[must_use]
	pub fn tabs(&self) -> &[TabUiConfig] {
		&self.tabs
	}

	#[must_use]
	pub fn tab_label(&self, mode: SearchMode) -> &str {
		self.index
			.get(&mode)
			.and_then(|position| self.tabs.get(*position))
			.map(|tab| tab.tab_label.as_str())
			.unwrap_or(mode.default_label())
	}

	#[must_use]
	pub fn suggestions(&self) -> &[String] {
		&self.suggestions
	}

	/// Replace the suggestion list. An empty list disables the overlay.
	pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
		self.suggestions = suggestions;
	}
}
