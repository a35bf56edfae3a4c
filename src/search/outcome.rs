use super::error::ClientError;
use super::result::{ResultItem, ResultsPayload, ValidationPayload};

/// Shown when a 422 response carries no usable `detail`.
pub const INVALID_QUERY_MESSAGE: &str = "Invalid search query. Please try again.";

/// Shown for every failure the user cannot correct by rewording the query.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

const UNPROCESSABLE_ENTITY: u16 = 422;

/// Classified result of one search request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
	Success(Vec<ResultItem>),
	/// The backend rejected the query; the message is safe to show verbatim.
	ValidationError(String),
	/// Anything else went wrong; the message is always generic.
	UnexpectedError(String),
}

impl SearchOutcome {
	#[must_use]
	pub fn unexpected() -> Self {
		SearchOutcome::UnexpectedError(UNEXPECTED_ERROR_MESSAGE.to_string())
	}

	/// Short label used in logs and JSON output.
	#[must_use]
	pub fn kind(&self) -> &'static str {
		match self {
			SearchOutcome::Success(_) => "success",
			SearchOutcome::ValidationError(_) => "validation_error",
			SearchOutcome::UnexpectedError(_) => "unexpected_error",
		}
	}

	/// User-facing error text, if the outcome is a failure.
	#[must_use]
	pub fn error_message(&self) -> Option<&str> {
		match self {
			SearchOutcome::Success(_) => None,
			SearchOutcome::ValidationError(message) | SearchOutcome::UnexpectedError(message) => {
				Some(message)
			}
		}
	}

	#[must_use]
	pub fn results(&self) -> &[ResultItem] {
		match self {
			SearchOutcome::Success(results) => results,
			_ => &[],
		}
	}
}

/// Classify an HTTP status and raw body into an outcome.
///
/// An `Err` means the response could not be interpreted at all and must be
/// reported as an unexpected error.
pub(crate) fn classify_response(status: u16, body: &[u8]) -> Result<SearchOutcome, ClientError> {
	if (200..300).contains(&status) {
		let payload: ResultsPayload = serde_json::from_slice(body)
			.map_err(|source| ClientError::Decode { status, source })?;
		return Ok(SearchOutcome::Success(payload.results));
	}

	if status == UNPROCESSABLE_ENTITY {
		let payload: ValidationPayload = serde_json::from_slice(body)
			.map_err(|source| ClientError::Decode { status, source })?;
		let message = payload.message().unwrap_or(INVALID_QUERY_MESSAGE);
		return Ok(SearchOutcome::ValidationError(message.to_string()));
	}

	Err(ClientError::Status { status })
}
