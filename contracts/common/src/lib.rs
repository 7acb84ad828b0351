//! stEDU Common Library
//!
//! Shared types, constants, and utilities for the stEDU liquid-staking
//! protocol. This crate holds the pure leaves of the system:
//!
//! - **Fixed-point index math**: conversions between EDU and stEDU at the
//!   global exchange index
//! - **Deposit tranches**: per-holder FIFO records enforcing the unbonding
//!   delay
//! - **Errors and events**: typed failure modes and the audit event log
//! - **Validation helpers**: reusable precondition checks
//!
//! The ledger state machine itself lives in the `stedu-ledger` crate; this
//! crate contains no mutable global state.
//!
//! This crate is `no_std` compatible for WASM compilation when built
//! without the `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Re-export Vec for submodules based on feature
#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;
#[cfg(feature = "std")]
pub use std::vec::Vec;

pub mod constants;
pub mod errors;
pub mod events;
pub mod math;
pub mod tranches;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use tranches::*;
pub use types::*;
pub use validation::*;
