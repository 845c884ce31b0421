//! Audio-thread block processor.
//!
//! [`ChainEngine`] holds the active order and the stage bank, drains the
//! order queue at the top of every block, and dispatches the stages in
//! sequence over the block. Everything on this path is allocation-free and
//! lock-free; the audio callback can call [`process_block`] under a hard
//! deadline.
//!
//! [`process_block`]: ChainEngine::process_block

use crate::control::ChainController;
use crate::fifo::{OrderConsumer, order_fifo};
use crate::stage::StageOrder;
use crate::table::{StageBank, StageTable};

/// The audio-thread half of the chain.
///
/// Generic over the stage bank so tests can instrument dispatch; production
/// code uses the default [`StageTable`] bank via [`ChainEngine::new`].
pub struct ChainEngine<B: StageBank = StageTable> {
    bank: B,
    orders: OrderConsumer,
    active_order: StageOrder,
}

impl ChainEngine<StageTable> {
    /// Create a connected controller/engine pair with the default stage set.
    ///
    /// The engine starts with the identity order (phaser, chorus, overdrive,
    /// ladder filter).
    pub fn new(sample_rate: f32) -> (ChainController, Self) {
        let (producer, consumer) = order_fifo();
        (
            ChainController::new(producer),
            Self::with_bank(StageTable::new(sample_rate), consumer, StageOrder::identity()),
        )
    }

    /// Mutable access to the owned stages, for the parameter layer.
    ///
    /// Writes land in place: the engine never moves or replaces a stage
    /// instance, so references handed out here stay meaningful for the
    /// engine's whole lifetime.
    pub fn stages_mut(&mut self) -> &mut StageTable {
        &mut self.bank
    }

    /// Propagate a sample-rate change to every stage.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.bank.set_sample_rate(sample_rate);
    }

    /// Clear all stage state (delay lines, filter memory).
    pub fn reset(&mut self) {
        self.bank.reset();
    }
}

impl<B: StageBank> ChainEngine<B> {
    /// Assemble an engine from parts.
    ///
    /// Used directly by tests that substitute an instrumented bank; normal
    /// construction goes through [`ChainEngine::new`].
    pub fn with_bank(bank: B, orders: OrderConsumer, initial_order: StageOrder) -> Self {
        Self {
            bank,
            orders,
            active_order: initial_order,
        }
    }

    /// The order currently in effect.
    pub fn active_order(&self) -> StageOrder {
        self.active_order
    }

    /// Shared access to the bank, for instrumented tests.
    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Process one stereo block in place.
    ///
    /// Drains the order queue first, keeping only the newest pending order
    /// (last writer wins; intermediate orders are never applied). The
    /// all-empty sentinel order is ignored so "nothing was pushed" can never
    /// masquerade as a real update. Then each real slot of the active order
    /// runs in strict sequence: stage `i`'s output is stage `i + 1`'s input.
    pub fn process_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(left.len(), right.len());

        if let Some(newest) = self.orders.drain_latest()
            && newest != StageOrder::default()
        {
            self.active_order = newest;
        }

        for kind in self.active_order.slots() {
            if kind.is_real() {
                self.bank.process_stage(kind, left, right);
            }
        }
    }
}
