//! Talking to the retrieval backend.
//!
//! [`HttpSearchClient`] performs one GET per query and classifies the reply
//! into a [`SearchOutcome`]; [`SearchDispatcher`] runs those requests on
//! background threads so the UI thread only ever sees finished settlements.

mod client;
mod error;
mod mode;
mod outcome;
mod result;
mod worker;

pub use client::{EndpointPaths, HttpSearchClient, QUERY_PARAM, SearchBackend};
pub use error::{ClientBuildError, ClientError};
pub use mode::{SearchMode, UnknownMode};
pub use outcome::{INVALID_QUERY_MESSAGE, SearchOutcome, UNEXPECTED_ERROR_MESSAGE};
pub use result::ResultItem;
pub use worker::{SearchDispatcher, SearchRequest, Settlement};
