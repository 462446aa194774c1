//! Peg Bias Board
//!
//! Triangular board of 12 rows, row `r` holding `r + 1` pegs. Each peg
//! carries a left-bias in [0.4, 0.6], the probability mass a ball hitting
//! it sends left.

use serde::{Deserialize, Serialize};

use crate::core::hash::{board_hash, canonical_board_json, Digest};
use crate::core::rng::{round_to, Xorshift32};
use crate::ROWS;

/// Draws consumed by [`generate_board`]: 1 + 2 + ... + 12.
pub const BOARD_DRAWS: usize = ROWS * (ROWS + 1) / 2;

/// Decimal places kept for each bias.
pub const BIAS_DECIMALS: u32 = 6;

/// Width of the bias band around 0.5. Written as a literal: `0.6 - 0.4`
/// is not exactly 0.2 in f64 and would shift every rounded bias.
pub const BIAS_SPREAD: f64 = 0.2;

/// Generated peg board. Immutable once built.
///
/// Serializes as the bare nested array, the same form that is hashed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PegBoard {
    pegs: Vec<Vec<f64>>,
}

impl PegBoard {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.pegs.len()
    }

    /// Left-bias of peg `peg` in row `row`.
    pub fn bias(&self, row: usize, peg: usize) -> Option<f64> {
        self.pegs.get(row)?.get(peg).copied()
    }

    /// All rows, top to bottom.
    pub fn pegs(&self) -> &[Vec<f64>] {
        &self.pegs
    }

    /// Iterate every bias value, row-major.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.pegs.iter().flatten().copied()
    }

    /// Canonical whitespace-free encoding (the hash preimage).
    pub fn canonical_json(&self) -> String {
        canonical_board_json(&self.pegs)
    }

    /// Public commitment to the board.
    pub fn hash(&self) -> Digest {
        board_hash(&self.pegs)
    }
}

/// Build the board from the next [`BOARD_DRAWS`] draws of `rng`.
///
/// Each draw `d` maps to `0.5 + (d - 0.5) * 0.2`, rounded to 6 places,
/// so every bias lands in [0.4, 0.6]. Returns the board and its hash.
pub fn generate_board(rng: &mut Xorshift32) -> (PegBoard, Digest) {
    let pegs: Vec<Vec<f64>> = (0..ROWS)
        .map(|row| {
            (0..=row)
                .map(|_| {
                    let raw = 0.5 + (rng.draw() - 0.5) * BIAS_SPREAD;
                    round_to(raw, BIAS_DECIMALS)
                })
                .collect()
        })
        .collect();

    let board = PegBoard { pegs };
    let hash = board.hash();
    (board, hash)
}

// =============================================================================
// TESTS
// =============================================================================
