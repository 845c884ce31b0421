//! Lock-free reorderable effect chain engine.
//!
//! The chain runs four DSP stages (phaser, chorus, overdrive, ladder filter)
//! in a user-chosen order. The order is replaced from a control/UI thread
//! while the audio thread keeps processing blocks; the handoff is a bounded
//! lock-free single-producer/single-consumer queue, so neither thread ever
//! blocks on the other.
//!
//! # Architecture
//!
//! ```text
//! Control thread                      Audio thread
//! ──────────────                      ────────────
//! ChainController::send(order)        ChainEngine::process_block(l, r)
//!   validate permutation                drain OrderFifo, keep newest
//!   OrderProducer::push  ──────────►    OrderConsumer::pop
//!                                       dispatch stages in active order
//! ```
//!
//! The engine owns one instance of each stage for its whole lifetime
//! ([`StageTable`]); reordering never moves, copies, or reallocates a stage,
//! so parameter writes from the control layer always land on live instances.
//!
//! # Example
//!
//! ```rust
//! use cadena_engine::{ChainEngine, StageKind, StageOrder};
//!
//! let (mut controller, mut engine) = ChainEngine::new(48000.0);
//!
//! // Control thread: put the ladder filter first.
//! controller
//!     .send(StageOrder::new([
//!         StageKind::LadderFilter,
//!         StageKind::Phaser,
//!         StageKind::Chorus,
//!         StageKind::Overdrive,
//!     ]))
//!     .unwrap();
//!
//! // Audio thread: the new order takes effect at the next block boundary.
//! let mut left = [0.0f32; 256];
//! let mut right = [0.0f32; 256];
//! engine.process_block(&mut left, &mut right);
//! ```

pub mod control;
pub mod engine;
pub mod error;
pub mod fifo;
pub mod stage;
pub mod table;

pub use control::ChainController;
pub use engine::ChainEngine;
pub use error::OrderError;
pub use fifo::{FIFO_CAPACITY, OrderConsumer, OrderProducer, order_fifo};
pub use stage::{STAGE_COUNT, StageKind, StageOrder};
pub use table::{StageBank, StageTable};
