//! Round Record
//!
//! The persisted shape of a round as it moves through commit, start and
//! reveal. A plain value: the caller owns storage, this type only enforces
//! which transitions are legal and fills in engine results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::core::hash::Digest;
use crate::error::EngineError;
use crate::game::path::Decision;
use crate::game::round::{run_round, RoundOutcome};
use crate::proof::commitment::{combined_seed, PublicCommitment, RoundCommitment};
use crate::proof::verify::StoredRound;
use crate::ROWS;

/// Lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundStatus {
    /// Committed, waiting for the player.
    Created,
    /// Outcome fixed, server seed still secret.
    Started,
    /// Server seed published.
    Revealed,
}

/// Stored round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// Round identifier.
    pub id: Uuid,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: RoundStatus,
    /// Per-round nonce.
    pub nonce: String,
    /// Commit hash published at creation.
    pub commit_hash: Digest,
    /// Secret server seed. Never expose before [`RoundStatus::Revealed`].
    pub server_seed: String,
    /// Board rows.
    pub rows: usize,
    /// Player's client seed.
    pub client_seed: Option<String>,
    /// Combined seed.
    pub combined_seed: Option<Digest>,
    /// Board hash.
    pub board_hash: Option<Digest>,
    /// Drop column.
    pub drop_column: Option<i32>,
    /// Landing bin.
    pub bin_index: Option<usize>,
    /// Payout multiplier.
    pub payout_multiplier: Option<f64>,
    /// Bet in cents.
    pub bet_cents: Option<u64>,
    /// Full decision path.
    pub path: Option<Vec<Decision>>,
    /// Reveal time.
    pub revealed_at: Option<DateTime<Utc>>,
}

/// Public view of a record. The server seed appears only once revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    /// Round identifier.
    pub id: Uuid,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: RoundStatus,
    /// Per-round nonce.
    pub nonce: String,
    /// Commit hash.
    pub commit_hash: Digest,
    /// Player's client seed.
    pub client_seed: Option<String>,
    /// Board hash.
    pub board_hash: Option<Digest>,
    /// Drop column.
    pub drop_column: Option<i32>,
    /// Landing bin.
    pub bin_index: Option<usize>,
    /// Payout multiplier.
    pub payout_multiplier: Option<f64>,
    /// Bet in cents.
    pub bet_cents: Option<u64>,
    /// Server seed, present once revealed.
    pub server_seed: Option<String>,
}

impl RoundRecord {
    /// Create a record from an existing commitment.
    pub fn from_commitment(commitment: RoundCommitment) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            status: RoundStatus::Created,
            nonce: commitment.nonce,
            commit_hash: commitment.commit_hash,
            server_seed: commitment.server_seed,
            rows: ROWS,
            client_seed: None,
            combined_seed: None,
            board_hash: None,
            drop_column: None,
            bin_index: None,
            payout_multiplier: None,
            bet_cents: None,
            path: None,
            revealed_at: None,
        }
    }

    /// Commit phase: mint a fresh seed and nonce.
    pub fn commit(seed_bytes: usize) -> Self {
        let record = Self::from_commitment(RoundCommitment::generate(seed_bytes));
        info!(round = %record.id, commit = %record.commit_hash, "Round committed");
        record
    }

    /// What the player receives after commit.
    pub fn public_commitment(&self) -> PublicCommitment {
        PublicCommitment {
            commit_hash: self.commit_hash.clone(),
            nonce: self.nonce.clone(),
        }
    }

    /// Start phase: fix the outcome with the player's seed and column.
    ///
    /// Requires [`RoundStatus::Created`]. On error the record is unchanged.
    pub fn start(
        &mut self,
        client_seed: &str,
        drop_column: i32,
        bet_cents: u64,
    ) -> Result<RoundOutcome, EngineError> {
        self.expect_status(RoundStatus::Created)?;
        if client_seed.is_empty() {
            return Err(EngineError::InvalidClientSeed);
        }
        if bet_cents == 0 {
            return Err(EngineError::InvalidBet { bet_cents });
        }

        let outcome = run_round(&self.server_seed, client_seed, &self.nonce, drop_column)?;

        self.status = RoundStatus::Started;
        self.client_seed = Some(client_seed.to_string());
        self.combined_seed = Some(combined_seed(&self.server_seed, client_seed, &self.nonce));
        self.board_hash = Some(outcome.board_hash.clone());
        self.drop_column = Some(drop_column);
        self.bin_index = Some(outcome.bin_index);
        self.payout_multiplier = Some(outcome.payout_multiplier);
        self.bet_cents = Some(bet_cents);
        self.path = Some(outcome.path.clone());

        info!(
            round = %self.id,
            bin = outcome.bin_index,
            multiplier = outcome.payout_multiplier,
            "Round started"
        );

        Ok(outcome)
    }

    /// Reveal phase: publish the server seed.
    ///
    /// Revealing twice returns the same seed. Revealing a round that has
    /// not started is an error.
    pub fn reveal(&mut self) -> Result<&str, EngineError> {
        match self.status {
            RoundStatus::Created => Err(EngineError::RoundState {
                expected: RoundStatus::Started,
                actual: RoundStatus::Created,
            }),
            RoundStatus::Started => {
                self.status = RoundStatus::Revealed;
                self.revealed_at = Some(Utc::now());
                info!(round = %self.id, "Round revealed");
                Ok(&self.server_seed)
            }
            RoundStatus::Revealed => Ok(&self.server_seed),
        }
    }

    /// Public view, hiding the server seed until revealed.
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            id: self.id,
            created_at: self.created_at,
            status: self.status,
            nonce: self.nonce.clone(),
            commit_hash: self.commit_hash.clone(),
            client_seed: self.client_seed.clone(),
            board_hash: self.board_hash.clone(),
            drop_column: self.drop_column,
            bin_index: self.bin_index,
            payout_multiplier: self.payout_multiplier,
            bet_cents: self.bet_cents,
            server_seed: (self.status == RoundStatus::Revealed).then(|| self.server_seed.clone()),
        }
    }

    /// Published values, for [`RoundVerification::compare`].
    ///
    /// [`RoundVerification::compare`]: crate::proof::verify::RoundVerification::compare
    pub fn stored(&self) -> StoredRound {
        StoredRound {
            commit_hash: self.commit_hash.clone(),
            combined_seed: self.combined_seed.clone(),
            board_hash: self.board_hash.clone(),
            bin_index: self.bin_index,
        }
    }

    fn expect_status(&self, expected: RoundStatus) -> Result<(), EngineError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(EngineError::RoundState {
                expected,
                actual: self.status,
            })
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
