use std::collections::HashMap;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;

use super::error::{ClientBuildError, ClientError};
use super::mode::SearchMode;
use super::outcome::{SearchOutcome, classify_response};

/// Query parameter carrying the user's text.
pub const QUERY_PARAM: &str = "text_query";

/// Anything able to answer a search for one mode.
///
/// The UI and the sessions only ever see this trait so that tests can swap the
/// HTTP client for an in-memory fake.
pub trait SearchBackend: Send + Sync {
	/// Run one search. Callers guarantee `query` is non-empty after trimming.
	fn search(&self, mode: SearchMode, query: &str) -> SearchOutcome;
}

/// Endpoint path segment (below `/api/`) for each mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPaths {
	paths: HashMap<SearchMode, String>,
}

impl Default for EndpointPaths {
	fn default() -> Self {
		let paths = SearchMode::all()
			.into_iter()
			.map(|mode| (mode, mode.id().to_string()))
			.collect();
		Self { paths }
	}
}

impl EndpointPaths {
	/// Override the path for `mode`; surrounding slashes are ignored.
	pub fn set(&mut self, mode: SearchMode, path: impl AsRef<str>) {
		let path = path.as_ref().trim().trim_matches('/').to_string();
		self.paths.insert(mode, path);
	}

	#[must_use]
	pub fn with(mut self, mode: SearchMode, path: impl AsRef<str>) -> Self {
		self.set(mode, path);
		self
	}

	#[must_use]
	pub fn path(&self, mode: SearchMode) -> &str {
		self.paths.get(&mode).map(String::as_str).unwrap_or(mode.id())
	}

	/// Join every mode's path onto `base_url` below `/api/`.
	pub fn resolve(&self, base_url: &str) -> Result<HashMap<SearchMode, Url>, ClientBuildError> {
		let base = Url::parse(base_url.trim()).map_err(|err| ClientBuildError::InvalidBaseUrl {
			url: base_url.to_string(),
			reason: err.to_string(),
		})?;
		SearchMode::all()
			.into_iter()
			.map(|mode| Ok::<_, ClientBuildError>((mode, endpoint_url(&base, mode, self.path(mode))?)))
			.collect()
	}
}

/// [`SearchBackend`] speaking the `GET /api/<mode>?text_query=...` contract.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
	http: Client,
	endpoints: HashMap<SearchMode, Url>,
}

impl HttpSearchClient {
	/// Build a client for `base_url`, resolving one endpoint per mode.
	///
	/// Requests carry no timeout: a backend that never answers leaves the
	/// issuing session loading until the user gives up.
	pub fn new(base_url: &str, paths: &EndpointPaths) -> Result<Self, ClientBuildError> {
		let endpoints = paths.resolve(base_url)?;
		let http = Client::builder()
			.timeout(None::<Duration>)
			.user_agent(concat!("tabsearch/", env!("CARGO_PKG_VERSION")))
			.build()?;

		Ok(Self { http, endpoints })
	}

	/// Fully resolved endpoint for `mode`, without the query string.
	#[must_use]
	pub fn endpoint(&self, mode: SearchMode) -> &Url {
		&self.endpoints[&mode]
	}

	fn execute(&self, mode: SearchMode, query: &str) -> Result<SearchOutcome, ClientError> {
		let url = self.endpoint(mode);
		tracing::debug!(%mode, endpoint = %url, "issuing search request");

		let response = self
			.http
			.get(url.clone())
			.query(&[(QUERY_PARAM, query)])
			.send()
			.map_err(|source| ClientError::Transport {
				url: url.to_string(),
				source,
			})?;

		let status = response.status().as_u16();
		let body = response
			.bytes()
			.map_err(|source| ClientError::Body { status, source })?;
		classify_response(status, &body)
	}
}

impl SearchBackend for HttpSearchClient {
	fn search(&self, mode: SearchMode, query: &str) -> SearchOutcome {
		match self.execute(mode, query) {
			Ok(outcome) => {
				if let SearchOutcome::ValidationError(message) = &outcome {
					tracing::info!(%mode, %message, "backend rejected query");
				}
				outcome
			}
			Err(err) => {
				tracing::error!(%mode, error = ?err, "search failed");
				SearchOutcome::unexpected()
			}
		}
	}
}

fn endpoint_url(base: &Url, mode: SearchMode, path: &str) -> Result<Url, ClientBuildError> {
	if path.is_empty() {
		return Err(ClientBuildError::EmptyEndpoint { mode });
	}

	let mut url = base.clone();
	url.set_query(None);
	url.set_fragment(None);
	{
		let mut segments = url
			.path_segments_mut()
			.map_err(|()| ClientBuildError::CannotBeABase {
				url: base.to_string(),
			})?;
		segments.pop_if_empty();
		segments.push("api");
		segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
	}
	Ok(url)
}
