use std::sync::Arc;

use anyhow::Result;

use super::App;
use super::config::UiConfig;
use super::outcome::UiOutcome;
use super::theme::Theme;
use crate::search::{SearchBackend, SearchMode};

/// A small builder for configuring the interactive search UI before running it.
pub struct SearchUi {
	backend: Arc<dyn SearchBackend>,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
	start_mode: Option<SearchMode>,
	initial_query: Option<String>,
}

impl SearchUi {
	/// Create a search UI that sends its requests to `backend`.
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			backend,
			ui_config: None,
			theme: None,
			start_mode: None,
			initial_query: None,
		}
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	/// Pre-fill the query of the starting tab.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	pub fn with_start_mode(mut self, mode: SearchMode) -> Self {
		self.start_mode = Some(mode);
		self
	}

	/// Assemble the [`App`] without entering the terminal.
	pub fn build(self) -> App {
		let mut app = App::new(self.backend, self.ui_config.unwrap_or_default());
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(mode) = self.start_mode {
			app.set_mode(mode);
		}
		if let Some(query) = self.initial_query.filter(|query| !query.is_empty()) {
			app.set_query(query);
		}
		app
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<UiOutcome> {
		self.build().run()
	}
}
