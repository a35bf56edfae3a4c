//! UI building blocks shared across rendering and state modules.

/// Query box and submit button.
pub mod input;
/// Search results list.
pub mod results;
/// Suggestion dropdown.
pub mod suggestions;
/// Mode tabs and loading status.
pub mod tabs;

pub use input::{InputContext, button_hit, render_input};
pub use results::{ResultsContext, render_results};
pub use suggestions::SuggestionOverlay;
pub use tabs::{StatusState, TabBarContext, TabItem, render_tab_bar, tab_at};
