//! Engine errors.
//!
//! The engine either returns a complete outcome or one of these.
//! It never hands back a partially computed path.

use crate::proof::record::RoundStatus;

/// Errors raised on contract violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Seed hex was shorter than 8 characters or not hexadecimal.
    #[error("Invalid seed hex: {input:?}")]
    InvalidSeedHex {
        /// Offending input (truncated to its first 16 characters).
        input: String,
    },

    /// Drop column outside [0, 12].
    #[error("Drop column {column} out of range [0, {max}]")]
    DropColumnOutOfRange {
        /// Column requested by the caller.
        column: i32,
        /// Highest valid column.
        max: i32,
    },

    /// Board does not have 12 rows of `row + 1` pegs.
    #[error("Malformed board at row {row}")]
    MalformedBoard {
        /// First row found missing or short.
        row: usize,
    },

    /// Client seed was empty.
    #[error("Client seed is required")]
    InvalidClientSeed,

    /// Bet was zero.
    #[error("Bet must be a positive number of cents, got {bet_cents}")]
    InvalidBet {
        /// Requested bet.
        bet_cents: u64,
    },

    /// Round record transition not allowed from its current status.
    #[error("Round is {actual:?}, expected {expected:?}")]
    RoundState {
        /// Status the transition requires.
        expected: RoundStatus,
        /// Status the record is in.
        actual: RoundStatus,
    },
}

impl EngineError {
    pub(crate) fn invalid_seed_hex(input: &str) -> Self {
        Self::InvalidSeedHex {
            input: input.chars().take(16).collect(),
        }
    }
}
