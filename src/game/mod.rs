//! Outcome Engine
//!
//! Board generation, the drop walk and payout lookup. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `board`: Peg bias board, first 78 draws of the round stream
//! - `path`: Biased random walk, next 12 draws of the same stream
//! - `payout`: Symmetric bin multiplier table
//! - `round`: Seed derivation through payout, one call per round

pub mod board;
pub mod path;
pub mod payout;
pub mod round;

// Re-export key types
pub use board::{generate_board, PegBoard, BOARD_DRAWS};
pub use path::{simulate_drop, Decision, DropResult, DROP_DRAWS};
pub use payout::{payout_multiplier, PAYOUT_TABLE};
pub use round::{run_round, RoundOutcome};
