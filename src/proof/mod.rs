//! Commit/Reveal Proof System
//!
//! Provides verifiable round outcomes through:
//! - Commit hash published before the round (server seed + nonce)
//! - Combined seed mixing in the player's client seed
//! - Verification by deterministic recomputation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROOF SYSTEM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  commitment.rs   - Commit hash, combined seed, fresh seeds  │
//! │  verify.rs       - Recompute a round, compare stored values │
//! │  record.rs       - Round record: commit -> start -> reveal  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod record;
pub mod verify;

// Re-export key types
pub use commitment::{combined_seed, commit_hash, PublicCommitment, RoundCommitment};
pub use record::{RoundRecord, RoundStatus, RoundSummary};
pub use verify::{
    verify_round, Mismatch, RoundVerification, StoredRound, VerificationReport, VerifiedField,
};
