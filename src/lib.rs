//! # Plinko Fair
//!
//! Provably fair outcome engine for a 12-row Plinko board.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        PLINKO FAIR                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/            - Deterministic primitives                │
//! │  ├── hash.rs      - SHA-256 hex digests, canonical encoding │
//! │  └── rng.rs       - Xorshift32 stream, rounding             │
//! │                                                             │
//! │  game/            - Outcome engine (deterministic)          │
//! │  ├── board.rs     - Peg bias board generation               │
//! │  ├── path.rs      - Biased random walk (drop simulation)    │
//! │  ├── payout.rs    - Symmetric payout table                  │
//! │  └── round.rs     - Round orchestration                     │
//! │                                                             │
//! │  proof/           - Commit/reveal and verification          │
//! │  ├── commitment.rs- Commit hash and combined seed           │
//! │  ├── verify.rs    - Recompute and compare                   │
//! │  └── record.rs    - Round record lifecycle                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given `(server_seed, client_seed, nonce, drop_column)` the engine always
//! produces the same board, path and bin:
//! - One xorshift32 stream per round, seeded from the combined seed
//! - Board generation consumes the first 78 draws, the drop the next 12
//! - All stored floats are rounded (6 or 10 places) before use
//! - No process-wide mutable state
//!
//! ```
//! use plinko_fair::{run_round, verify_round};
//!
//! let server = "b2a5f3f32a4d9c6ee7a8c1d33456677890abcdeffedcba0987654321ffeeddcc";
//! let outcome = run_round(server, "candidate-hello", "42", 6).unwrap();
//! assert_eq!(outcome.bin_index, 6);
//!
//! let check = verify_round(server, "candidate-hello", "42", 6).unwrap();
//! assert_eq!(check.board_hash, outcome.board_hash);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod proof;

// Re-export commonly used types
pub use crate::core::hash::{hash, random_token};
pub use crate::core::rng::{round_to, seed_from_hex, Xorshift32};
pub use error::EngineError;
pub use game::board::{generate_board, PegBoard};
pub use game::path::{simulate_drop, Decision, DropResult};
pub use game::payout::{payout_multiplier, PAYOUT_TABLE};
pub use game::round::{run_round, RoundOutcome};
pub use proof::commitment::{combined_seed, commit_hash, RoundCommitment};
pub use proof::record::{RoundRecord, RoundStatus};
pub use proof::verify::{verify_round, RoundVerification, StoredRound, VerificationReport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of peg rows on the board.
pub const ROWS: usize = 12;

/// Number of landing bins (one more than rows).
pub const BINS: usize = ROWS + 1;

/// Lowest possible peg left-bias.
pub const MIN_BIAS: f64 = 0.4;

/// Highest possible peg left-bias.
pub const MAX_BIAS: f64 = 0.6;

/// Bias shift per column of distance between drop column and board center.
pub const DROP_COLUMN_INFLUENCE: f64 = 0.01;
