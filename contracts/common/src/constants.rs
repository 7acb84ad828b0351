//! Protocol Constants
//!
//! All magic numbers and configuration values for the stEDU protocol.
//!
//! # Network Configuration
//!
//! Use feature flags to compile for different networks:
//! - `mainnet` - Production values (full 7-day unbonding delay)
//! - Default (no feature) - Testnet values (short delay for testing)
//!
//! ```toml
//! # For mainnet deployment:
//! stedu-common = { path = "...", features = ["mainnet"] }
//! ```

/// Token Metadata
pub mod token {
    /// Share token name
    pub const NAME: &str = "Staked EDU";
    /// Share token symbol
    pub const SYMBOL: &str = "stEDU";
    /// Decimal places of ledger base units
    pub const DECIMALS: u8 = 8;
    /// One unit with decimals (1 EDU = 100_000_000 base units)
    pub const ONE: u64 = 100_000_000;
}

/// Staking Configuration
pub mod staking {
    /// Unbonding delay: seconds between a deposit and the moment its
    /// shares become redeemable.
    /// - Mainnet: 7 days
    /// - Testnet: 1 hour (allows exercising the lock without long waits)
    #[cfg(feature = "mainnet")]
    pub const UNSTAKE_DELAY: u64 = 7 * 24 * 60 * 60;
    #[cfg(not(feature = "mainnet"))]
    pub const UNSTAKE_DELAY: u64 = 60 * 60;

    /// Helper to check if running in mainnet mode
    #[cfg(feature = "mainnet")]
    pub const IS_MAINNET: bool = true;
    #[cfg(not(feature = "mainnet"))]
    pub const IS_MAINNET: bool = false;
}

/// Precision constants
pub mod precision {
    /// Fixed-point scale of the exchange index ("1.0")
    pub const INDEX_SCALE: u128 = 1_000_000_000_000_000_000; // 1e18

    /// Index value at deployment: 1 stEDU redeems exactly 1 EDU
    pub const INITIAL_INDEX: u128 = INDEX_SCALE;
}
