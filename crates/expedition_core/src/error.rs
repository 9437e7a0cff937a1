//! Error types for the simulation core.
//!
//! The only algorithmic failure is asking the dice for an empty range.
//! Everything else here guards the seams: bad configuration, arithmetic
//! that would overflow, and resuming a state that does not fit the rules.

use thiserror::Error;

/// Failure of a single dice roll.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceError {
    /// `roll(n)` requires `n >= 1`.
    #[error("Invalid dice range: {0} (must be at least 1)")]
    InvalidRange(i64),
}

/// Main error type for simulation operations.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// A dice roll was requested with an empty range
    #[error(transparent)]
    Dice(#[from] DiceError),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Payout did not fit in 128 bits
    #[error("Payout overflow: {tiles} tiles, {mushrooms} mushrooms")]
    PayoutOverflow { tiles: u64, mushrooms: u64 },

    /// A persisted state cannot be resumed under the current rules
    #[error("State mismatch: {0}")]
    StateMismatch(String),
}

impl SimulationError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates a new state mismatch error.
    #[must_use]
    pub fn state_mismatch<S: Into<String>>(msg: S) -> Self {
        Self::StateMismatch(msg.into())
    }
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
