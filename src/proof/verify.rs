//! Verification API
//!
//! Verify rounds by deterministic recomputation. Given the revealed
//! server seed, anyone can rebuild the commit, the seed, the board and the
//! path, then compare them against what was published.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::hash::Digest;
use crate::error::EngineError;
use crate::game::path::Decision;
use crate::game::round::run_round;
use crate::proof::commitment::{combined_seed, commit_hash};

/// Values recomputed from a revealed round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundVerification {
    /// `hash(server_seed:nonce)`.
    pub commit_hash: Digest,
    /// `hash(server_seed:client_seed:nonce)`.
    pub combined_seed: Digest,
    /// Hash of the recomputed board.
    pub board_hash: Digest,
    /// Recomputed landing bin.
    pub bin_index: usize,
    /// Recomputed decisions.
    pub path: Vec<Decision>,
}

/// Previously published values for a round.
///
/// Everything but the commit hash is absent until the round has started.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRound {
    /// Commit hash published before the round.
    pub commit_hash: Digest,
    /// Combined seed recorded at start.
    pub combined_seed: Option<Digest>,
    /// Board hash recorded at start.
    pub board_hash: Option<Digest>,
    /// Bin recorded at start.
    pub bin_index: Option<usize>,
}

/// Field compared during verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerifiedField {
    /// Commit hash.
    CommitHash,
    /// Combined seed.
    CombinedSeed,
    /// Board hash.
    BoardHash,
    /// Landing bin.
    BinIndex,
}

impl fmt::Display for VerifiedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CommitHash => "commit hash",
            Self::CombinedSeed => "combined seed",
            Self::BoardHash => "board hash",
            Self::BinIndex => "bin index",
        };
        f.write_str(name)
    }
}

/// One stored value that disagrees with the recomputation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{field} mismatch: stored {}, computed {computed}", .stored.as_deref().unwrap_or("<missing>"))]
pub struct Mismatch {
    /// Which field.
    pub field: VerifiedField,
    /// Stored value, `None` if it was never recorded.
    pub stored: Option<String>,
    /// Recomputed value.
    pub computed: String,
}

/// Outcome of comparing a recomputation against stored values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    /// Every field that disagreed, in comparison order.
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    /// True iff every compared field matched.
    pub fn is_valid(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl RoundVerification {
    /// Compare against stored values.
    ///
    /// Checks commit hash, combined seed, board hash and bin index. A
    /// stored value that is absent counts as a mismatch.
    pub fn compare(&self, stored: &StoredRound) -> VerificationReport {
        let mut mismatches = Vec::new();

        let mut check = |field: VerifiedField, stored: Option<String>, computed: String| {
            if stored.as_deref() != Some(computed.as_str()) {
                mismatches.push(Mismatch {
                    field,
                    stored,
                    computed,
                });
            }
        };

        check(
            VerifiedField::CommitHash,
            Some(stored.commit_hash.clone()),
            self.commit_hash.clone(),
        );
        check(
            VerifiedField::CombinedSeed,
            stored.combined_seed.clone(),
            self.combined_seed.clone(),
        );
        check(
            VerifiedField::BoardHash,
            stored.board_hash.clone(),
            self.board_hash.clone(),
        );
        check(
            VerifiedField::BinIndex,
            stored.bin_index.map(|bin| bin.to_string()),
            self.bin_index.to_string(),
        );

        for mismatch in &mismatches {
            warn!("Verification failed: {}", mismatch);
        }

        VerificationReport { mismatches }
    }
}

/// Recompute every public value of a round.
///
/// Only recomputes. Use [`RoundVerification::compare`] to check the
/// result against stored values.
pub fn verify_round(
    server_seed: &str,
    client_seed: &str,
    nonce: &str,
    drop_column: i32,
) -> Result<RoundVerification, EngineError> {
    let outcome = run_round(server_seed, client_seed, nonce, drop_column)?;

    let verification = RoundVerification {
        commit_hash: commit_hash(server_seed, nonce),
        combined_seed: combined_seed(server_seed, client_seed, nonce),
        board_hash: outcome.board_hash,
        bin_index: outcome.bin_index,
        path: outcome.path,
    };

    debug!(
        commit = %verification.commit_hash,
        bin = verification.bin_index,
        "Recomputed round"
    );

    Ok(verification)
}

// =============================================================================
// TESTS
// =============================================================================
