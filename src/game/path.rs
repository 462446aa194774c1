//! Drop Simulation
//!
//! Walks a ball down the board as a biased random walk. Continues the
//! same stream that built the board: 12 more draws, one per row.

use serde::{Deserialize, Serialize};

use crate::core::rng::{round_to, Xorshift32};
use crate::error::EngineError;
use crate::game::board::{PegBoard, BIAS_DECIMALS};
use crate::{BINS, DROP_COLUMN_INFLUENCE, ROWS};

/// Draws consumed by [`simulate_drop`].
pub const DROP_DRAWS: usize = ROWS;

/// Decimal places kept for each random draw.
pub const DRAW_DECIMALS: u32 = 10;

/// Board center column, `floor(ROWS / 2)`.
pub const CENTER_COLUMN: i32 = (ROWS / 2) as i32;

/// Highest valid drop column.
pub const MAX_DROP_COLUMN: i32 = (BINS - 1) as i32;

/// One peg hit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Peg hit within the row.
    pub peg_index: usize,
    /// Bias stored on the board for that peg.
    pub left_bias: f64,
    /// Bias after the drop column shift, clamped to [0, 1], 6 places.
    pub adjusted_bias: f64,
    /// Stream draw rounded to 10 places.
    #[serde(rename = "random")]
    pub random_draw: f64,
    /// Whether the ball moved right.
    pub went_right: bool,
    /// Rightward moves so far, including this one.
    #[serde(rename = "posAfter")]
    pub position_after: usize,
}

/// Complete walk: 12 decisions and the landing bin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropResult {
    /// Decisions, top row first.
    pub path: Vec<Decision>,
    /// Final position, always in [0, 12].
    pub bin_index: usize,
}

/// Check a drop column against [0, 12].
pub fn validate_drop_column(drop_column: i32) -> Result<i32, EngineError> {
    if (0..=MAX_DROP_COLUMN).contains(&drop_column) {
        Ok(drop_column)
    } else {
        Err(EngineError::DropColumnOutOfRange {
            column: drop_column,
            max: MAX_DROP_COLUMN,
        })
    }
}

/// Left-bias shift for a drop column.
///
/// Positive right of center. It is added to each peg's left-bias, so a
/// column right of center raises the threshold a draw must reach to go right.
#[inline]
pub fn column_adjustment(drop_column: i32) -> f64 {
    (drop_column - CENTER_COLUMN) as f64 * DROP_COLUMN_INFLUENCE
}

/// Walk the ball through `board` using the next 12 draws of `rng`.
///
/// `rng` must be the stream [`generate_board`](crate::game::board::generate_board)
/// just consumed. Fails before drawing anything if `drop_column` is
/// outside [0, 12] or the board does not have 12 rows. A row without
/// exactly `row + 1` pegs fails when the walk reaches it.
pub fn simulate_drop(
    board: &PegBoard,
    drop_column: i32,
    rng: &mut Xorshift32,
) -> Result<DropResult, EngineError> {
    let drop_column = validate_drop_column(drop_column)?;
    if board.rows() != ROWS {
        return Err(EngineError::MalformedBoard { row: board.rows().min(ROWS) });
    }
    let shift = column_adjustment(drop_column);

    let mut position = 0usize;
    let mut path = Vec::with_capacity(DROP_DRAWS);

    for (row, pegs) in board.pegs().iter().enumerate() {
        // The ball reaches at most one new peg per row
        if pegs.len() != row + 1 {
            return Err(EngineError::MalformedBoard { row });
        }
        let peg_index = position.min(row);
        let left_bias = pegs[peg_index];
        let adjusted_bias = (left_bias + shift).clamp(0.0, 1.0);

        let random_draw = round_to(rng.draw(), DRAW_DECIMALS);
        let went_right = random_draw >= adjusted_bias;
        if went_right {
            position += 1;
        }

        path.push(Decision {
            row,
            peg_index,
            left_bias,
            adjusted_bias: round_to(adjusted_bias, BIAS_DECIMALS),
            random_draw,
            went_right,
            position_after: position,
        });
    }

    Ok(DropResult {
        path,
        bin_index: position,
    })
}

// =============================================================================
// TESTS
// =============================================================================
