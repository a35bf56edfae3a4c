//! Core crate exports for building and running the `tabsearch` terminal interface.
//!
//! [`search`] talks to the backend, [`session`] holds the per-mode state
//! machines and [`ui`] draws them. The root re-exports the types embedders
//! need to wire the three together without digging through the hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod search;
pub mod session;
pub mod ui;

pub use search::{
	ClientBuildError, EndpointPaths, HttpSearchClient, INVALID_QUERY_MESSAGE, ResultItem,
	SearchBackend, SearchDispatcher, SearchMode, SearchOutcome, SearchRequest, Settlement,
	UNEXPECTED_ERROR_MESSAGE,
};
pub use session::{SearchSession, SearchState, SessionEvent, SessionPhase, TabOrchestrator};
pub use ui::{SearchUi, TabUiConfig, Theme, UiConfig, UiOutcome};
