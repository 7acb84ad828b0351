//! Error Types for the stEDU Protocol
//!
//! Typed errors for every way a ledger operation can fail. Every mutating
//! operation is all-or-nothing: an error surfaces synchronously and leaves
//! no partial state behind.

use crate::types::Address;

/// Result type alias for stEDU operations
pub type StEduResult<T> = Result<T, StEduError>;

/// Main error enum for all stEDU protocol errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StEduError {
    // ============ Amount Errors ============
    /// Zero asset amount where a positive stake/reward is required
    ZeroAmount,

    /// Zero share amount where a positive unstake/transfer is required
    ZeroShares,

    /// Insufficient balance for operation
    InsufficientBalance { available: u64, requested: u64 },

    /// No reward value attached to a reward deposit
    NoReward,

    // ============ Unbonding Errors ============
    /// Requested shares exceed what the unbonding delay has released
    StillLocked { unlocked: u64, requested: u64 },

    /// Reward deposit or sync with no shares outstanding
    NothingStaked,

    /// Sync found no surplus between custody and the recorded balance
    NoSurplus,

    // ============ Authorization Errors ============
    /// Caller is not authorized for this operation
    Unauthorized { expected: Address, actual: Address },

    // ============ Guard Errors ============
    /// Nested call detected while the reentrancy lock is held
    ReentrantCall,

    /// Protocol is paused
    ProtocolPaused,

    /// Unpause requested while the protocol is not paused
    NotPaused,

    // ============ Math Errors ============
    /// Arithmetic overflow occurred
    Overflow,

    /// Arithmetic underflow occurred
    Underflow,

    /// Division by zero
    DivisionByZero,

    // ============ Input Validation Errors ============
    /// Invalid address (e.g., zero address)
    InvalidAddress {
        /// Description of why the address is invalid
        reason: &'static str,
    },

    /// Underlying asset payout failed
    TransferFailed { to: Address, amount: u64 },

    /// Generic vault-style deposit/withdraw entry points are disabled;
    /// callers must go through stake/unstake so tranche tracking is never
    /// bypassed
    DirectEntryDisabled,
}

impl StEduError {
    /// Returns a human-readable error code for logging/debugging
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "E001_ZERO_AMOUNT",
            Self::ZeroShares => "E002_ZERO_SHARES",
            Self::InsufficientBalance { .. } => "E003_INSUFFICIENT_BALANCE",
            Self::NoReward => "E004_NO_REWARD",
            Self::StillLocked { .. } => "E010_STILL_LOCKED",
            Self::NothingStaked => "E011_NOTHING_STAKED",
            Self::NoSurplus => "E012_NO_SURPLUS",
            Self::Unauthorized { .. } => "E020_UNAUTHORIZED",
            Self::ReentrantCall => "E030_REENTRANT_CALL",
            Self::ProtocolPaused => "E031_PAUSED",
            Self::NotPaused => "E032_NOT_PAUSED",
            Self::Overflow => "E040_OVERFLOW",
            Self::Underflow => "E041_UNDERFLOW",
            Self::DivisionByZero => "E042_DIV_ZERO",
            Self::InvalidAddress { .. } => "E050_INVALID_ADDRESS",
            Self::TransferFailed { .. } => "E051_TRANSFER_FAILED",
            Self::DirectEntryDisabled => "E052_DIRECT_ENTRY_DISABLED",
        }
    }

    /// Returns true if this error is recoverable (caller can resubmit later)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::StillLocked { .. } => true,       // Wait out the delay
            Self::ProtocolPaused => true,           // Wait for unpause
            Self::NoSurplus => true,                // Wait for a donation
            Self::InsufficientBalance { .. } => true, // Get more funds
            _ => false,
        }
    }
}
