//! Stage identifiers and processing orders.
//!
//! [`StageKind`] names the four DSP stages plus the `End` sentinel ("no
//! stage in this slot"). [`StageOrder`] is the complete processing sequence
//! the audio thread walks each block. Orders are plain fixed-size values —
//! four bytes of payload — so they pack into a `u32` for lock-free transport
//! and serialize trivially for an external persistence layer.

use crate::error::OrderError;

/// Number of real DSP stages in the chain.
pub const STAGE_COUNT: usize = 4;

/// Identifier for one slot of the processing chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StageKind {
    /// Swept allpass cascade.
    Phaser = 0,
    /// Modulated delay line.
    Chorus = 1,
    /// Saturating waveshaper.
    Overdrive = 2,
    /// Four-pole resonant filter.
    LadderFilter = 3,
    /// Terminal sentinel: no stage in this slot (default).
    #[default]
    End = 4,
}

impl StageKind {
    /// The four real stages, in declaration order.
    pub const REAL: [StageKind; STAGE_COUNT] = [
        StageKind::Phaser,
        StageKind::Chorus,
        StageKind::Overdrive,
        StageKind::LadderFilter,
    ];

    /// Whether this is a real stage (not the `End` sentinel).
    #[inline]
    pub fn is_real(self) -> bool {
        self != StageKind::End
    }

    fn from_u8(value: u8) -> StageKind {
        match value {
            0 => StageKind::Phaser,
            1 => StageKind::Chorus,
            2 => StageKind::Overdrive,
            3 => StageKind::LadderFilter,
            // Bytes `pack` never emits decode as the sentinel; a foreign
            // u32 then fails `validate` instead of aborting the host.
            _ => StageKind::End,
        }
    }
}

/// A complete processing order: one [`StageKind`] per chain slot.
///
/// Two orders are equal iff every slot matches. The default (all `End`) is
/// the queue-drain sentinel meaning "no update was pulled" and is never a
/// valid processing order in its own right — [`validate`](Self::validate)
/// rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageOrder([StageKind; STAGE_COUNT]);

impl StageOrder {
    /// Create an order from explicit slots.
    pub const fn new(slots: [StageKind; STAGE_COUNT]) -> Self {
        Self(slots)
    }

    /// The declaration-order chain: phaser, chorus, overdrive, ladder.
    pub const fn identity() -> Self {
        Self(StageKind::REAL)
    }

    /// The slots, first-processed first.
    #[inline]
    pub fn slots(&self) -> [StageKind; STAGE_COUNT] {
        self.0
    }

    /// The kind at `slot`, or `None` past the end of the chain.
    pub fn get(&self, slot: usize) -> Option<StageKind> {
        self.0.get(slot).copied()
    }

    /// Whether every real stage appears exactly once.
    pub fn is_permutation(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the permutation invariant.
    ///
    /// Returns the first violation found: a duplicated stage, a missing
    /// stage, or the reserved all-empty sentinel.
    pub fn validate(&self) -> Result<(), OrderError> {
        if *self == StageOrder::default() {
            return Err(OrderError::EmptySentinel);
        }
        let mut seen = [false; STAGE_COUNT];
        for kind in self.0 {
            if kind.is_real() {
                let idx = kind as usize;
                if seen[idx] {
                    return Err(OrderError::DuplicateStage(kind));
                }
                seen[idx] = true;
            }
        }
        for (idx, present) in seen.iter().enumerate() {
            if !present {
                return Err(OrderError::MissingStage(StageKind::REAL[idx]));
            }
        }
        Ok(())
    }

    /// Pack into a `u32`, one byte per slot, for atomic transport.
    #[inline]
    pub fn pack(self) -> u32 {
        u32::from_le_bytes(self.0.map(|kind| kind as u8))
    }

    /// Unpack a value produced by [`pack`](Self::pack).
    ///
    /// Total over arbitrary input: bytes outside the stage-kind range decode
    /// as `End`, so a corrupted or foreign value yields an order that
    /// [`validate`](Self::validate) rejects rather than a panic.
    #[inline]
    pub fn unpack(packed: u32) -> Self {
        Self(packed.to_le_bytes().map(StageKind::from_u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_end() {
        assert_eq!(
            StageOrder::default().slots(),
            [StageKind::End; STAGE_COUNT]
        );
    }

    #[test]
    fn identity_is_a_permutation() {
        assert!(StageOrder::identity().is_permutation());
    }

    #[test]
    fn equality_is_positional() {
        let a = StageOrder::identity();
        let b = StageOrder::new([
            StageKind::Chorus,
            StageKind::Phaser,
            StageKind::Overdrive,
            StageKind::LadderFilter,
        ]);
        assert_ne!(a, b);
        assert_eq!(a, StageOrder::identity());
    }

    #[test]
    fn duplicate_detected() {
        let order = StageOrder::new([
            StageKind::Phaser,
            StageKind::Phaser,
            StageKind::Overdrive,
            StageKind::LadderFilter,
        ]);
        assert_eq!(
            order.validate(),
            Err(OrderError::DuplicateStage(StageKind::Phaser))
        );
    }

    #[test]
    fn missing_detected() {
        let order = StageOrder::new([
            StageKind::Phaser,
            StageKind::Chorus,
            StageKind::Overdrive,
            StageKind::End,
        ]);
        assert_eq!(
            order.validate(),
            Err(OrderError::MissingStage(StageKind::LadderFilter))
        );
    }

    #[test]
    fn sentinel_rejected() {
        assert_eq!(
            StageOrder::default().validate(),
            Err(OrderError::EmptySentinel)
        );
    }

    #[test]
    fn pack_round_trips() {
        let orders = [
            StageOrder::identity(),
            StageOrder::default(),
            StageOrder::new([
                StageKind::LadderFilter,
                StageKind::Phaser,
                StageKind::Chorus,
                StageKind::Overdrive,
            ]),
            StageOrder::new([
                StageKind::End,
                StageKind::Chorus,
                StageKind::End,
                StageKind::Overdrive,
            ]),
        ];
        for order in orders {
            assert_eq!(StageOrder::unpack(order.pack()), order);
        }
    }

    #[test]
    fn foreign_bytes_unpack_as_sentinel() {
        // Byte values pack never produces must not panic; they decode to
        // End and the resulting order fails validation.
        let order = StageOrder::unpack(u32::from_le_bytes([5, 200, 0, 255]));
        assert_eq!(order.get(0), Some(StageKind::End));
        assert_eq!(order.get(1), Some(StageKind::End));
        assert_eq!(order.get(2), Some(StageKind::Phaser));
        assert_eq!(order.get(3), Some(StageKind::End));
        assert!(order.validate().is_err());
    }

    #[test]
    fn distinct_orders_pack_distinctly() {
        let a = StageOrder::identity().pack();
        let b = StageOrder::new([
            StageKind::Chorus,
            StageKind::Phaser,
            StageKind::Overdrive,
            StageKind::LadderFilter,
        ])
        .pack();
        assert_ne!(a, b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn order_is_serializable() {
        let order = StageOrder::identity();
        let json = serde_json::to_string(&order).unwrap();
        let back: StageOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
