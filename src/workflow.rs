use std::sync::Arc;

use anyhow::{Result, ensure};
use tabsearch::{HttpSearchClient, SearchBackend, SearchMode, SearchSession, SearchUi, UiOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let search_ui = SearchUiFactory::build(config)?;
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<UiOutcome> {
		self.search_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig) -> Result<SearchUi> {
		let client = HttpSearchClient::new(&config.base_url, &config.endpoints)?;
		let ResolvedConfig {
			theme,
			start_mode,
			initial_query,
			ui,
			..
		} = config;

		let builder = Self::new(Arc::new(client))
			.with_ui_config(ui)
			.with_theme(theme)
			.with_start_mode(start_mode)
			.with_initial_query(initial_query);

		Ok(builder.finish())
	}

	fn new(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			search_ui: SearchUi::new(backend),
		}
	}

	fn with_ui_config(mut self, ui: tabsearch::UiConfig) -> Self {
		self.search_ui = self.search_ui.with_ui_config(ui);
		self
	}

	fn with_theme(mut self, theme: tabsearch::Theme) -> Self {
		self.search_ui = self.search_ui.with_theme(theme);
		self
	}

	fn with_start_mode(mut self, mode: SearchMode) -> Self {
		self.search_ui = self.search_ui.with_start_mode(mode);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		if !query.is_empty() {
			self.search_ui = self.search_ui.with_initial_query(query);
		}
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}

/// A single search run outside the terminal UI.
pub(crate) struct OneShotSearch {
	backend: Box<dyn SearchBackend>,
	mode: SearchMode,
}

impl OneShotSearch {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let client = HttpSearchClient::new(&config.base_url, &config.endpoints)?;
		Ok(Self::with_backend(Box::new(client), config.start_mode))
	}

	fn with_backend(backend: Box<dyn SearchBackend>, mode: SearchMode) -> Self {
		Self { backend, mode }
	}

	/// Drive a fresh session through one submit and return it settled.
	///
	/// Blank queries are refused by the session before any request is made.
	pub(crate) fn run(&self, query: &str) -> Result<SearchSession> {
		let mut session = SearchSession::new(self.mode);
		session.on_query_change(query);
		tracing::info!(mode = %self.mode, "running one-shot search");
		ensure!(session.submit_with(&*self.backend), "query must not be blank");
		Ok(session)
	}
}
