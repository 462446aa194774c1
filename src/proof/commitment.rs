//! Round Commitment Protocol
//!
//! Commit to the server seed before the player picks a client seed.
//! Reveal it afterwards so anyone can recompute the round.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::hash::{hash, random_token, Digest};

/// Default server seed length in bytes (64 hex characters).
pub const DEFAULT_SEED_BYTES: usize = 32;

/// `hash(server_seed + ":" + nonce)`, published before the round.
///
/// Independent of the client seed.
pub fn commit_hash(server_seed: &str, nonce: &str) -> Digest {
    hash(format!("{}:{}", server_seed, nonce))
}

/// `hash(server_seed + ":" + client_seed + ":" + nonce)`.
///
/// The round's only entropy source.
pub fn combined_seed(server_seed: &str, client_seed: &str, nonce: &str) -> Digest {
    hash(format!("{}:{}:{}", server_seed, client_seed, nonce))
}

/// Server side of a commitment.
///
/// Holds the secret seed. Only [`PublicCommitment`] leaves the server
/// before the round is revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundCommitment {
    /// Secret server seed (hex).
    pub server_seed: String,
    /// Per-round nonce.
    pub nonce: String,
    /// Published commit hash.
    pub commit_hash: Digest,
}

/// What the player sees before the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicCommitment {
    /// Published commit hash.
    pub commit_hash: Digest,
    /// Per-round nonce.
    pub nonce: String,
}

impl RoundCommitment {
    /// Commit to a caller-chosen seed and nonce.
    pub fn new(server_seed: impl Into<String>, nonce: impl Into<String>) -> Self {
        let server_seed = server_seed.into();
        let nonce = nonce.into();
        let commit_hash = commit_hash(&server_seed, &nonce);
        Self {
            server_seed,
            nonce,
            commit_hash,
        }
    }

    /// Mint a fresh secret seed of `seed_bytes` random bytes and a UUID v4 nonce.
    pub fn generate(seed_bytes: usize) -> Self {
        Self::new(random_token(seed_bytes), Uuid::new_v4().to_string())
    }

    /// Public half of the commitment.
    pub fn public(&self) -> PublicCommitment {
        PublicCommitment {
            commit_hash: self.commit_hash.clone(),
            nonce: self.nonce.clone(),
        }
    }

    /// Check that a revealed seed matches this commitment.
    pub fn verify_reveal(&self, revealed_seed: &str) -> bool {
        commit_hash(revealed_seed, &self.nonce) == self.commit_hash
    }
}

impl PublicCommitment {
    /// Check that a revealed seed matches the published commit.
    pub fn verify_reveal(&self, revealed_seed: &str) -> bool {
        commit_hash(revealed_seed, &self.nonce) == self.commit_hash
    }
}

// =============================================================================
// TESTS
// =============================================================================
