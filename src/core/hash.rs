//! Hashing for Commitments and Board Fingerprints
//!
//! Provides the one-way hash behind every published value:
//! - Commit hash and combined seed (see `proof::commitment`)
//! - Board hash over the canonical board encoding
//! - Fresh random tokens for server seeds

use std::fmt::Write as _;

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest as _, Sha256};

/// Lowercase hex SHA-256 digest (64 characters).
pub type Digest = String;

/// Hex length of a [`Digest`].
pub const DIGEST_HEX_LEN: usize = 64;

/// SHA-256 of `input`, lowercase hex encoded.
///
/// # Example
///
/// ```
/// use plinko_fair::hash;
///
/// assert_eq!(
///     hash("test"),
///     "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
/// );
/// ```
pub fn hash(input: impl AsRef<[u8]>) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(input.as_ref());
    hex::encode(hasher.finalize())
}

/// Cryptographically secure random bytes, hex encoded (`2 * byte_len` chars).
///
/// Used to mint server seeds. Not deterministic.
///
/// # Panics
/// Panics if the operating system entropy source is unavailable. That is an
/// environment failure, not something a caller can recover from.
pub fn random_token(byte_len: usize) -> String {
    let mut bytes = vec![0u8; byte_len];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Encode a board as whitespace-free nested JSON arrays.
///
/// Byte-identical to `JSON.stringify` on the same nested number arrays, so
/// board hashes match across implementations.
pub fn canonical_board_json(rows: &[Vec<f64>]) -> String {
    let mut out = String::with_capacity(rows.len() * rows.len() * 5);
    out.push('[');
    for (r, row) in rows.iter().enumerate() {
        if r > 0 {
            out.push(',');
        }
        out.push('[');
        for (p, value) in row.iter().enumerate() {
            if p > 0 {
                out.push(',');
            }
            write_number(&mut out, *value);
        }
        out.push(']');
    }
    out.push(']');
    out
}

/// Append `value` using the shortest round-trip decimal form.
///
/// Matches ECMAScript number-to-string: plain decimal in [1e-6, 1e21),
/// exponent form outside it, `0` for negative zero, `null` for non-finite.
pub fn write_number(out: &mut String, value: f64) {
    if !value.is_finite() {
        out.push_str("null");
        return;
    }
    if value == 0.0 {
        out.push('0');
        return;
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        // Display is shortest round-trip and never switches to exponent form
        let _ = write!(out, "{}", value);
    } else {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => {
                let _ = write!(out, "{}e+{}", mantissa, exp);
            }
            _ => out.push_str(&formatted),
        }
    }
}

/// Hash of a board's canonical encoding.
pub fn board_hash(rows: &[Vec<f64>]) -> Digest {
    hash(canonical_board_json(rows))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> String {
        let mut out = String::new();
        write_number(&mut out, value);
        out
    }

    #[test]
    fn test_hash_known_vector() {
        assert_eq!(
            hash("test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
        assert_eq!(hash(b"test"), hash("test"));
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let digest = hash("anything at all");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_random_token_length_and_charset() {
        let token = random_token(32);
        assert_eq!(token.len(), 64);
        assert!(hex::decode(&token).is_ok());

        assert_eq!(random_token(0), "");
        assert_eq!(random_token(4).len(), 8);
    }

    #[test]
    fn test_random_tokens_differ() {
        assert_ne!(random_token(32), random_token(32));
    }

    #[test]
    fn test_number_formatting_matches_js() {
        assert_eq!(number(0.422123), "0.422123");
        assert_eq!(number(0.4), "0.4");
        assert_eq!(number(0.6), "0.6");
        assert_eq!(number(0.5), "0.5");
        assert_eq!(number(1.0), "1");
        assert_eq!(number(16.0), "16");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number(1.5e-7), "1.5e-7");
        assert_eq!(number(1e21), "1e+21");
        assert_eq!(number(f64::NAN), "null");
    }

    #[test]
    fn test_canonical_board_json() {
        let rows = vec![vec![0.422123], vec![0.552503, 0.408786]];
        assert_eq!(canonical_board_json(&rows), "[[0.422123],[0.552503,0.408786]]");
        assert_eq!(canonical_board_json(&[]), "[]");
    }

    #[test]
    fn test_board_hash_is_hash_of_encoding() {
        let rows = vec![vec![0.5], vec![0.4, 0.6]];
        assert_eq!(board_hash(&rows), hash("[[0.5],[0.4,0.6]]"));
    }
}
