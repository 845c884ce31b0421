//! Bounded lock-free SPSC queue for stage orders.
//!
//! The only cross-thread path in the engine. The control thread pushes
//! complete [`StageOrder`]s; the audio thread drains them at the top of each
//! block. Both sides are wait-free: a fixed ring of atomic cells plus
//! monotonic head/tail counters, no locks, no allocation after construction.
//!
//! Orders travel packed as `u32` ([`StageOrder::pack`]), so each ring slot
//! is a single `AtomicU32` and the whole queue is plain safe Rust.
//!
//! The producer/consumer split is enforced by ownership: [`order_fifo`]
//! returns exactly one [`OrderProducer`] and one [`OrderConsumer`], and both
//! `push` and `pop` take `&mut self`. There is no way to clone a second
//! handle onto either end.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use crate::stage::StageOrder;

/// Ring capacity in pending orders.
///
/// Reorders come from human-scale UI gestures; sixteen pending complete
/// orderings is far beyond any realistic burst, and an overflowed push only
/// costs one block of staleness because the consumer keeps the newest.
pub const FIFO_CAPACITY: usize = 16;

/// Shared ring storage. Head and tail are monotonic; a slot index is
/// `counter % FIFO_CAPACITY`.
struct Ring {
    slots: [AtomicU32; FIFO_CAPACITY],
    /// Next slot to read. Written only by the consumer.
    head: AtomicUsize,
    /// Next slot to write. Written only by the producer.
    tail: AtomicUsize,
}

/// Control-thread handle: pushes new orders.
pub struct OrderProducer {
    ring: Arc<Ring>,
}

/// Audio-thread handle: pops pending orders.
pub struct OrderConsumer {
    ring: Arc<Ring>,
}

/// Create a connected producer/consumer pair.
pub fn order_fifo() -> (OrderProducer, OrderConsumer) {
    let ring = Arc::new(Ring {
        slots: std::array::from_fn(|_| AtomicU32::new(0)),
        head: AtomicUsize::new(0),
        tail: AtomicUsize::new(0),
    });
    (
        OrderProducer { ring: ring.clone() },
        OrderConsumer { ring },
    )
}

impl OrderProducer {
    /// Attempt to enqueue an order.
    ///
    /// Returns `false` if the ring is full. Never blocks, never allocates;
    /// the caller decides whether to drop or retry later.
    #[inline]
    pub fn push(&mut self, order: StageOrder) -> bool {
        let tail = self.ring.tail.load(Ordering::Relaxed);
        let head = self.ring.head.load(Ordering::Acquire);
        if tail.wrapping_sub(head) == FIFO_CAPACITY {
            return false;
        }
        self.ring.slots[tail % FIFO_CAPACITY].store(order.pack(), Ordering::Relaxed);
        // Publishes the slot write to the consumer.
        self.ring.tail.store(tail.wrapping_add(1), Ordering::Release);
        true
    }

    /// Number of orders currently pending (racy snapshot, for diagnostics).
    pub fn pending(&self) -> usize {
        let tail = self.ring.tail.load(Ordering::Relaxed);
        let head = self.ring.head.load(Ordering::Acquire);
        tail.wrapping_sub(head)
    }
}

impl OrderConsumer {
    /// Attempt to dequeue the oldest pending order.
    ///
    /// Returns `None` when the ring is empty. Never blocks, never allocates.
    #[inline]
    pub fn pop(&mut self) -> Option<StageOrder> {
        let head = self.ring.head.load(Ordering::Relaxed);
        let tail = self.ring.tail.load(Ordering::Acquire);
        if head == tail {
            return None;
        }
        let packed = self.ring.slots[head % FIFO_CAPACITY].load(Ordering::Relaxed);
        // Frees the slot for the producer.
        self.ring.head.store(head.wrapping_add(1), Ordering::Release);
        Some(StageOrder::unpack(packed))
    }

    /// Drain everything pending and return only the newest order.
    ///
    /// Intermediate orders are intentionally discarded: an ordering change
    /// is a complete state replacement, so only the last writer matters.
    #[inline]
    pub fn drain_latest(&mut self) -> Option<StageOrder> {
        let mut latest = None;
        while let Some(order) = self.pop() {
            latest = Some(order);
        }
        latest
    }
}
