//! Interactive terminal UI for `tabsearch`.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, the rendering pipeline, the
//! key and mouse handling on top of [`crate::session::TabOrchestrator`], and
//! the reusable widgets and themes.

mod actions;
mod builder;
pub mod components;
mod config;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;
pub mod theme;


pub use builder::SearchUi;
pub use config::{DEFAULT_SUGGESTIONS, TabUiConfig, UiConfig};
pub use outcome::UiOutcome;
pub use state::{App, Focus};
pub use theme::Theme;
