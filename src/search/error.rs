use thiserror::Error;

/// Reasons a search round trip could not produce results.
///
/// These never reach the user directly: the client logs them and collapses
/// them into [`SearchOutcome::UnexpectedError`](super::SearchOutcome).
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("request to {url} failed")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("failed to read response body (status {status})")]
	Body {
		status: u16,
		#[source]
		source: reqwest::Error,
	},

	#[error("backend responded with unexpected status {status}")]
	Status { status: u16 },

	#[error("failed to decode response body (status {status})")]
	Decode {
		status: u16,
		#[source]
		source: serde_json::Error,
	},
}

/// Errors raised while constructing an [`HttpSearchClient`](super::HttpSearchClient).
#[derive(Debug, Error)]
pub enum ClientBuildError {
	#[error("invalid backend base URL '{url}': {reason}")]
	InvalidBaseUrl { url: String, reason: String },

	#[error("backend base URL '{url}' cannot carry an endpoint path")]
	CannotBeABase { url: String },

	#[error("endpoint path for mode {mode} is empty")]
	EmptyEndpoint { mode: super::SearchMode },

	#[error("failed to initialise HTTP client")]
	Http(#[from] reqwest::Error),
}
