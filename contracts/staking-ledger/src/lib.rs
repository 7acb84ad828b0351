//! stEDU Staking Ledger
//!
//! The share/index accounting core of the stEDU liquid-staking protocol.
//! Users stake EDU and receive stEDU shares; each holder's share balance is
//! fixed, and redemption value grows through a single global exchange index
//! that rises only when yield is injected. No per-holder reward bookkeeping
//! exists anywhere.
//!
//! ## Core Operations
//!
//! - **Stake**: deposit EDU, mint shares at the current index, record a
//!   deposit tranche that unlocks after the unbonding delay
//! - **Unstake**: burn unlocked shares oldest-first and pay out EDU at the
//!   current index
//! - **DepositRewards**: owner-only yield injection; lifts the index for
//!   every share proportionally
//! - **Sync**: anyone may fold an out-of-band surplus into the index so
//!   donated value is never stranded
//! - **AdminWithdraw**: owner-only emergency extraction that deliberately
//!   leaves the recorded balance untouched
//!
//! ## Safety Model
//!
//! Every external call runs to completion atomically; the only concurrency
//! hazard is reentrancy through the asset payout hook. A single
//! contract-wide lock guards the paths that transfer assets out, and all
//! internal state is finalized before any external interaction.
//!
//! The underlying asset is an opaque capability ([`custody::AssetCustody`])
//! with credit and pay-out operations; the ledger never binds to one
//! concrete asset implementation.

pub mod custody;
pub mod ledger;


// Re-exports for convenience
pub use custody::*;
pub use ledger::*;
