//! Control-thread handle for reordering the chain.
//!
//! [`ChainController`] is the policy layer in front of the raw order queue:
//! it validates that a requested order is a permutation of the real stages
//! before pushing it, so the audio thread never has to defend against
//! malformed orders. Validation failures are control-thread-local errors;
//! a full queue is not an error at all, just a dropped request (the next
//! successful push supersedes it anyway).

use crate::error::OrderError;
use crate::fifo::OrderProducer;
use crate::stage::StageOrder;

/// Control-thread half of the chain: validates and submits new orders.
pub struct ChainController {
    orders: OrderProducer,
}

impl ChainController {
    pub(crate) fn new(orders: OrderProducer) -> Self {
        Self { orders }
    }

    /// Submit a new processing order.
    ///
    /// Returns `Ok(true)` if the order was queued, `Ok(false)` if the queue
    /// was full and the request was dropped (callers may retry; under
    /// last-writer-wins semantics a dropped intermediate order is
    /// harmless), or an [`OrderError`] if the order is not a permutation of
    /// the four stages.
    pub fn send(&mut self, order: StageOrder) -> Result<bool, OrderError> {
        order.validate()?;
        let accepted = self.orders.push(order);
        if !accepted {
            log::debug!("order queue full, dropping reorder request");
        }
        Ok(accepted)
    }

    /// Number of orders queued but not yet drained by the audio thread.
    pub fn pending(&self) -> usize {
        self.orders.pending()
    }
}
