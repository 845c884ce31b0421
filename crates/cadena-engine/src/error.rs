//! Control-side errors.
//!
//! Everything here stays on the control thread: a malformed order is
//! rejected before it ever reaches the queue, so the audio thread only ever
//! sees orders that satisfy the chain's invariants.

use crate::stage::StageKind;
use thiserror::Error;

/// A stage order failed validation at the control boundary.
///
/// The chain requires every order to be a permutation of the four real
/// stages: each stage exactly once, no empty slots. Anything else would run
/// a stage twice (doubling its state advance) or silently drop one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A stage appears in more than one slot.
    #[error("stage {0:?} appears more than once in the order")]
    DuplicateStage(StageKind),

    /// A stage appears in no slot.
    #[error("stage {0:?} is missing from the order")]
    MissingStage(StageKind),

    /// The all-empty order is reserved as the queue's "no update" sentinel.
    #[error("the empty order is reserved as the no-update sentinel")]
    EmptySentinel,
}
