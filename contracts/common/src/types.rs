//! Core Types for the stEDU Protocol
//!
//! Fundamental data structures shared across the protocol crates.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::tranches::TrancheBook;

/// Type alias for addresses (32-byte hash)
pub type Address = [u8; 32];

/// The zero address; rejected wherever a real recipient is required
pub const ZERO_ADDRESS: Address = [0u8; 32];

/// Derives a deterministic address from arbitrary seed bytes.
///
/// Addresses in this system are opaque 32-byte identifiers; this helper
/// hashes a label or public key into one.
pub fn derive_address(seed: &[u8]) -> Address {
    let digest = Sha256::digest(seed);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

// ============ Holder Types ============

/// Per-address staking state.
///
/// Created lazily on first stake and never removed; both the share balance
/// and the tranche book can drain back to empty. Outside of share
/// transfers, `share_balance` equals the sum of the tranche book.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Holder {
    /// stEDU share balance
    pub share_balance: u64,
    /// Time-ordered deposit records backing the unbonding delay
    pub tranches: TrancheBook,
    /// Optional delegation pointer; pure bookkeeping with no economic
    /// effect
    pub delegate: Option<Address>,
}

impl Holder {
    /// Creates an empty holder record
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the holder has neither shares nor tranches
    pub fn is_empty(&self) -> bool {
        self.share_balance == 0 && self.tranches.is_empty()
    }
}
