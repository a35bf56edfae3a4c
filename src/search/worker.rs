use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use super::client::SearchBackend;
use super::mode::SearchMode;
use super::outcome::SearchOutcome;

/// A query a session has committed to sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub mode: SearchMode,
	pub query: String,
	/// Correlates the eventual [`Settlement`] with the submit that issued it.
	pub ticket: u64,
}

/// The classified answer to a [`SearchRequest`], delivered back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
	pub mode: SearchMode,
	pub ticket: u64,
	pub outcome: SearchOutcome,
}

/// Runs requests off the UI thread and queues their settlements.
///
/// Every request gets its own short-lived thread so that slow modes never hold
/// up other modes. Settlements are drained with [`SearchDispatcher::try_recv`]
/// from the event loop, one at a time.
pub struct SearchDispatcher {
	backend: Arc<dyn SearchBackend>,
	tx: Sender<Settlement>,
	rx: Receiver<Settlement>,
}

impl SearchDispatcher {
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		let (tx, rx) = mpsc::channel();
		Self { backend, tx, rx }
	}

	/// Launch `request` in the background.
	pub fn dispatch(&self, request: SearchRequest) -> io::Result<()> {
		let backend = Arc::clone(&self.backend);
		let tx = self.tx.clone();
		thread::Builder::new()
			.name(format!("search-{}", request.mode))
			.spawn(move || {
				let SearchRequest {
					mode,
					query,
					ticket,
				} = request;
				let outcome = backend.search(mode, &query);
				tracing::debug!(
					%mode,
					ticket,
					outcome = outcome.kind(),
					results = outcome.results().len(),
					error = outcome.error_message(),
					"search settled"
				);
				// The receiver only disappears when the UI is shutting down.
				let _ = tx.send(Settlement {
					mode,
					ticket,
					outcome,
				});
			})?;
		Ok(())
	}

	pub fn try_recv(&self) -> Result<Settlement, TryRecvError> {
		self.rx.try_recv()
	}

	#[cfg(test)]
	pub(crate) fn recv_timeout(
		&self,
		timeout: std::time::Duration,
	) -> Result<Settlement, mpsc::RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{Condvar, Mutex};
	use std::time::Duration;

	use super::*;
	use crate::search::result::ResultItem;

	/// Backend that blocks `sparse` requests until released.
	#[derive(Default)]
	struct GatedBackend {
		released: Mutex<bool>,
		gate: Condvar,
	}

	impl GatedBackend {
		fn release(&self) {
			let mut released = self.released.lock().expect("lock");
			*released = true;
			self.gate.notify_all();
		}
	}

	impl SearchBackend for GatedBackend {
		fn search(&self, mode: SearchMode, query: &str) -> SearchOutcome {
			if mode == SearchMode::Sparse {
				let mut released = self.released.lock().expect("lock");
				while !*released {
					released = self.gate.wait(released).expect("wait");
				}
			}
			SearchOutcome::Success(vec![ResultItem::new(query, 1.0, mode.id())])
		}
	}

	fn request(mode: SearchMode, query: &str, ticket: u64) -> SearchRequest {
		SearchRequest {
			mode,
			query: query.to_string(),
			ticket,
		}
	}

	#[test]
	fn settlement_carries_mode_and_ticket() {
		let dispatcher = SearchDispatcher::new(Arc::new(GatedBackend::default()));
		dispatcher
			.dispatch(request(SearchMode::Dense, "close games", 7))
			.expect("dispatch");

		let settlement = dispatcher
			.recv_timeout(Duration::from_secs(5))
			.expect("settlement");
		assert_eq!(settlement.mode, SearchMode::Dense);
		assert_eq!(settlement.ticket, 7);
		assert_eq!(settlement.outcome.results()[0].id, "close games");
	}

	#[test]
	fn slow_mode_does_not_block_other_modes() {
		let backend = Arc::new(GatedBackend::default());
		let dispatcher = SearchDispatcher::new(backend.clone());
		dispatcher
			.dispatch(request(SearchMode::Sparse, "slow", 1))
			.expect("dispatch sparse");
		dispatcher
			.dispatch(request(SearchMode::Hybrid, "fast", 1))
			.expect("dispatch hybrid");

		let first = dispatcher
			.recv_timeout(Duration::from_secs(5))
			.expect("hybrid settles first");
		assert_eq!(first.mode, SearchMode::Hybrid);

		backend.release();
		let second = dispatcher
			.recv_timeout(Duration::from_secs(5))
			.expect("sparse settles after release");
		assert_eq!(second.mode, SearchMode::Sparse);
	}
}
