//! Fixed-Point Index Arithmetic
//!
//! Pure conversions between EDU assets and stEDU shares at the global
//! exchange index. The index is a u128 ratio scaled by
//! [`precision::INDEX_SCALE`] (1e18 = "1.0"); asset and share amounts are
//! u64 base units.
//!
//! All rounding is floor/truncation toward zero, so
//! `assets_for(shares_for(x, idx), idx) <= x` for every index value: a
//! stake-then-immediate-unstake can lose at most 1 unit to rounding, never
//! gain one.

use crate::constants::precision;
use crate::errors::{StEduError, StEduResult};

/// Converts an asset amount into shares at the given index.
///
/// `shares = floor(assets * INDEX_SCALE / index)`
pub fn shares_for(assets: u64, index: u128) -> StEduResult<u64> {
    let scaled = (assets as u128)
        .checked_mul(precision::INDEX_SCALE)
        .ok_or(StEduError::Overflow)?;
    let shares = scaled.checked_div(index).ok_or(StEduError::DivisionByZero)?;

    u64::try_from(shares).map_err(|_| StEduError::Overflow)
}

/// Converts a share amount into assets at the given index.
///
/// `assets = floor(shares * index / INDEX_SCALE)`
pub fn assets_for(shares: u64, index: u128) -> StEduResult<u64> {
    let scaled = (shares as u128)
        .checked_mul(index)
        .ok_or(StEduError::Overflow)?;
    let assets = scaled / precision::INDEX_SCALE;

    u64::try_from(assets).map_err(|_| StEduError::Overflow)
}

/// Index increase from distributing `amount` of assets over
/// `total_shares` outstanding shares.
///
/// `gain = floor(amount * INDEX_SCALE / total_shares)`
///
/// This is the single formula behind both reward deposits and surplus
/// syncs: value enters without minting shares, so every existing share is
/// worth proportionally more.
pub fn index_gain(amount: u64, total_shares: u64) -> StEduResult<u128> {
    if total_shares == 0 {
        return Err(StEduError::NothingStaked);
    }

    (amount as u128)
        .checked_mul(precision::INDEX_SCALE)
        .ok_or(StEduError::Overflow)
        .map(|scaled| scaled / total_shares as u128)
}

/// Safe addition with overflow check
pub fn safe_add(a: u64, b: u64) -> StEduResult<u64> {
    a.checked_add(b).ok_or(StEduError::Overflow)
}

/// Safe subtraction with underflow check
pub fn safe_sub(a: u64, b: u64) -> StEduResult<u64> {
    a.checked_sub(b).ok_or(StEduError::Underflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{precision::INDEX_SCALE, precision::INITIAL_INDEX, token::ONE};

    #[test]
    fn test_shares_at_initial_index() {
        // At 1.0 the conversion is the identity
        assert_eq!(shares_for(10 * ONE, INITIAL_INDEX).unwrap(), 10 * ONE);
        assert_eq!(assets_for(10 * ONE, INITIAL_INDEX).unwrap(), 10 * ONE);
    }

    #[test]
    fn test_shares_at_grown_index() {
        // Index 1.1: 110 EDU mints 100 shares, 100 shares redeem 110 EDU
        let index = INDEX_SCALE + INDEX_SCALE / 10;
        assert_eq!(shares_for(110 * ONE, index).unwrap(), 100 * ONE);
        assert_eq!(assets_for(100 * ONE, index).unwrap(), 110 * ONE);
    }

    #[test]
    fn test_round_trip_never_gains() {
        let indexes = [
            INITIAL_INDEX,
            INDEX_SCALE + 1,
            INDEX_SCALE + INDEX_SCALE / 10,
            INDEX_SCALE * 3 / 2,
            INDEX_SCALE * 7,
        ];
        let amounts = [1u64, 2, 3, 999, ONE, 7 * ONE + 13, 1_000 * ONE];

        for &index in &indexes {
            for &assets in &amounts {
                let shares = shares_for(assets, index).unwrap();
                let back = assets_for(shares, index).unwrap();
                assert!(
                    back <= assets,
                    "round trip gained value: {} -> {} -> {} at index {}",
                    assets,
                    shares,
                    back,
                    index
                );
            }
        }
    }

    #[test]
    fn test_index_gain_scenario() {
        // 10 EDU reward over 100 shares lifts the index by 0.1
        let gain = index_gain(10 * ONE, 100 * ONE).unwrap();
        assert_eq!(gain, INDEX_SCALE / 10);

        let new_index = INITIAL_INDEX + gain;
        assert_eq!(assets_for(100 * ONE, new_index).unwrap(), 110 * ONE);
    }

    #[test]
    fn test_index_gain_requires_shares() {
        assert_eq!(index_gain(ONE, 0), Err(StEduError::NothingStaked));
    }

    #[test]
    fn test_overflow_rejected() {
        // u64::MAX * 1e18 overflows u128 scaled math only with an absurd
        // index; the checked path must reject rather than wrap
        assert_eq!(assets_for(u64::MAX, u128::MAX), Err(StEduError::Overflow));
        assert_eq!(shares_for(1, 0), Err(StEduError::DivisionByZero));
    }

    #[test]
    fn test_assets_for_overflowing_result() {
        // A huge index can push the asset value past u64
        let index = INDEX_SCALE * (u64::MAX as u128);
        assert_eq!(assets_for(2, index), Err(StEduError::Overflow));
    }

    #[test]
    fn test_safe_ops() {
        assert_eq!(safe_add(1, 2).unwrap(), 3);
        assert_eq!(safe_add(u64::MAX, 1), Err(StEduError::Overflow));
        assert_eq!(safe_sub(3, 1).unwrap(), 2);
        assert_eq!(safe_sub(1, 3), Err(StEduError::Underflow));
    }
}
