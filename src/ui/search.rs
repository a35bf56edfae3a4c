use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use super::App;
use crate::search::{SearchOutcome, SearchRequest, Settlement};
use crate::session::SessionEvent;

impl App {
	/// Submit the active tab's query. Returns whether a request went out.
	pub(crate) fn submit(&mut self, now: Instant) -> bool {
		match self.tabs.dispatch(SessionEvent::Submit, now) {
			Some(request) => {
				self.issue(request);
				true
			}
			None => false,
		}
	}

	/// Drain any settlements waiting on the dispatcher.
	pub(crate) fn pump_settlements(&mut self) {
		loop {
			match self.dispatcher.try_recv() {
				Ok(settlement) => self.handle_settlement(settlement),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_settlement(&mut self, settlement: Settlement) {
		let mode = settlement.mode;
		if self.tabs.settle(settlement) {
			self.list_state_mut(mode).select(None);
			self.ensure_selection(mode);
		}
	}

	fn issue(&mut self, request: SearchRequest) {
		let SearchRequest { mode, ticket, .. } = request;
		tracing::info!(%mode, ticket, "search issued");
		if let Err(err) = self.dispatcher.dispatch(request) {
			tracing::error!(%mode, ticket, error = %err, "failed to start search thread");
			self.handle_settlement(Settlement {
				mode,
				ticket,
				outcome: SearchOutcome::unexpected(),
			});
		}
	}
}
