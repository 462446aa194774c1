//! Round Engine
//!
//! One call per round: combined seed -> stream -> board -> drop -> payout.
//! Pure: no I/O, no shared state, same inputs give the same outcome.

use serde::{Deserialize, Serialize};

use crate::core::hash::Digest;
use crate::core::rng::Xorshift32;
use crate::error::EngineError;
use crate::game::board::{generate_board, PegBoard};
use crate::game::path::{simulate_drop, validate_drop_column, Decision};
use crate::game::payout::{payout_cents, PAYOUT_TABLE};
use crate::proof::commitment::combined_seed;

/// Full result of a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    /// Generated peg board.
    pub board: PegBoard,
    /// Hash of the board's canonical encoding.
    pub board_hash: Digest,
    /// 12 decisions, top row first.
    pub path: Vec<Decision>,
    /// Landing bin in [0, 12].
    pub bin_index: usize,
    /// Multiplier for `bin_index`.
    pub payout_multiplier: f64,
}

impl RoundOutcome {
    /// Payout in whole cents for `bet_cents` staked on this round.
    pub fn payout_cents(&self, bet_cents: u64) -> u64 {
        payout_cents(bet_cents, self.bin_index).unwrap_or_default()
    }
}

/// Play a round.
///
/// The board takes the first 78 draws of the stream and the drop the next
/// 12. Fails with [`EngineError::DropColumnOutOfRange`] if `drop_column`
/// is outside [0, 12].
pub fn run_round(
    server_seed: &str,
    client_seed: &str,
    nonce: &str,
    drop_column: i32,
) -> Result<RoundOutcome, EngineError> {
    validate_drop_column(drop_column)?;

    let seed_hex = combined_seed(server_seed, client_seed, nonce);
    let mut rng = Xorshift32::from_hex(&seed_hex)?;

    let (board, board_hash) = generate_board(&mut rng);
    let walk = simulate_drop(&board, drop_column, &mut rng)?;

    Ok(RoundOutcome {
        board,
        board_hash,
        path: walk.path,
        bin_index: walk.bin_index,
        payout_multiplier: PAYOUT_TABLE[walk.bin_index],
    })
}

// =============================================================================
// TESTS
// =============================================================================
