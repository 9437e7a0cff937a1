//! Deterministic dice backed by a hash-chained entropy pool.
//!
//! A [`Dice`] is a small value: 32 bytes of entropy plus a nibble cursor.
//! Rolling never mutates in place; [`Dice::roll`] returns the drawn value
//! together with the successor state, so sequences can be replayed, branched
//! and snapshotted freely.
//!
//! ## Example
//!
//! ```
//! use expedition_core::dice::Dice;
//! use expedition_data::Seed;
//!
//! let dice = Dice::new(&Seed::from_u64(7));
//! let (value, next) = dice.roll(6).unwrap();
//! assert!(value < 6);
//!
//! // Same state, same roll.
//! assert_eq!(dice.roll(6).unwrap(), (value, next));
//! ```

use crate::error::DiceError;
use crate::hash::{phase_seed, round_seed, sha256, Hash32};
use expedition_data::Seed;
use serde::{Deserialize, Serialize};

/// Number of 4-bit nibbles in one entropy block.
pub const NIBBLES_PER_BLOCK: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    entropy: Hash32,
    /// Next unread nibble, always in `0..64`.
    cursor: u8,
}

impl Dice {
    /// Dice whose entropy is the seed itself.
    #[must_use]
    pub fn new(seed: &Seed) -> Self {
        Self::from_entropy(*seed.as_bytes())
    }

    #[must_use]
    pub const fn from_entropy(entropy: Hash32) -> Self {
        Self { entropy, cursor: 0 }
    }

    /// Independent stream for a named game phase, keyed by `H(seed, label)`.
    #[must_use]
    pub fn from_phase(seed: &Seed, label: &str) -> Self {
        Self::from_entropy(phase_seed(seed, label))
    }

    /// Independent stream for one round of a phase, keyed by `H(seed, label, round)`.
    #[must_use]
    pub fn from_round(seed: &Seed, label: &str, round: u64) -> Self {
        Self::from_entropy(round_seed(seed, label, round))
    }

    #[must_use]
    pub fn entropy(&self) -> &Hash32 {
        &self.entropy
    }

    #[must_use]
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Nibble under the cursor: high half of the byte for even positions.
    #[inline]
    fn peek_nibble(&self) -> u8 {
        let byte = self.entropy[usize::from(self.cursor / 2)];
        if self.cursor % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0F
        }
    }

    #[inline]
    fn next_nibble(self) -> (u8, Dice) {
        let value = self.peek_nibble();
        let mut next = self;
        next.cursor += 1;
        if next.cursor == NIBBLES_PER_BLOCK {
            next.entropy = sha256(&next.entropy);
            next.cursor = 0;
        }
        (value, next)
    }

    /// Uniform draw from `0..n`.
    ///
    /// `n == 1` returns `0` and leaves the state untouched; independent
    /// evaluators rely on that to keep their cursors aligned.
    ///
    /// # Errors
    /// [`DiceError::InvalidRange`] when `n <= 0`.
    pub fn roll(self, n: i64) -> Result<(u64, Dice), DiceError> {
        if n <= 0 {
            return Err(DiceError::InvalidRange(n));
        }
        if n == 1 {
            return Ok((0, self));
        }

        let n = n as u64;
        let nibbles = nibbles_for(n);
        let max_value = 1u128 << (4 * nibbles);
        let modulus = u128::from(n);
        let threshold = max_value - max_value % modulus;

        let mut state = self;
        loop {
            let mut value = 0u128;
            for _ in 0..nibbles {
                let (nibble, next) = state.next_nibble();
                value = (value << 4) | u128::from(nibble);
                state = next;
            }
            if value < threshold {
                return Ok(((value % modulus) as u64, state));
            }
        }
    }

    /// [`Dice::roll`] that replaces `self` with the successor state.
    ///
    /// # Errors
    /// [`DiceError::InvalidRange`] when `n <= 0`; `self` is left unchanged.
    pub fn roll_in_place(&mut self, n: i64) -> Result<u64, DiceError> {
        let (value, next) = self.roll(n)?;
        *self = next;
        Ok(value)
    }
}

/// `ceil(log2(n))` for `n >= 2`.
#[inline]
fn ceil_log2(n: u64) -> u32 {
    u64::BITS - (n - 1).leading_zeros()
}

/// Nibbles drawn per attempt: `max(1, ceil(bits / 4))`.
#[inline]
fn nibbles_for(n: u64) -> u32 {
    ceil_log2(n).div_ceil(4).max(1)
}
