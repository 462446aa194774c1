//! Payout Table
//!
//! Symmetric around bin 6: the center pays the least, the edges the most.

use crate::BINS;

/// Multiplier per bin, index = bin.
pub const PAYOUT_TABLE: [f64; BINS] = [
    16.0, 9.0, 4.0, 2.0, 1.4, 1.1, 1.0, 1.1, 1.4, 2.0, 4.0, 9.0, 16.0,
];

/// Multiplier for `bin`, `None` outside [0, 12].
#[inline]
pub fn payout_multiplier(bin: usize) -> Option<f64> {
    PAYOUT_TABLE.get(bin).copied()
}

/// Payout in whole cents for a bet landing in `bin`.
///
/// Rounded half away from zero. `None` outside [0, 12].
pub fn payout_cents(bet_cents: u64, bin: usize) -> Option<u64> {
    let multiplier = payout_multiplier(bin)?;
    Some((bet_cents as f64 * multiplier).round() as u64)
}

// =============================================================================
// TESTS
// =============================================================================
