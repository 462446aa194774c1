//! Core deterministic primitives.
//!
//! Hashing and the seeded number stream. Everything above this layer
//! derives its randomness from here.

pub mod hash;
pub mod rng;

// Re-export core types
pub use hash::{hash, random_token, Digest};
pub use rng::{round_to, seed_from_hex, Xorshift32};
