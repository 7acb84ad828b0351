//! Validation Helpers for the stEDU Protocol
//!
//! Centralized precondition checks used by the ledger's entry points.
//! Each helper returns the typed error its caller surfaces unchanged.

use crate::errors::{StEduError, StEduResult};
use crate::types::{Address, ZERO_ADDRESS};

/// Requires a positive asset amount
pub fn require_nonzero_assets(amount: u64) -> StEduResult<()> {
    if amount == 0 {
        return Err(StEduError::ZeroAmount);
    }
    Ok(())
}

/// Requires a positive share amount
pub fn require_nonzero_shares(shares: u64) -> StEduResult<()> {
    if shares == 0 {
        return Err(StEduError::ZeroShares);
    }
    Ok(())
}

/// Requires `available >= requested`
pub fn require_sufficient_balance(available: u64, requested: u64) -> StEduResult<()> {
    if available < requested {
        return Err(StEduError::InsufficientBalance {
            available,
            requested,
        });
    }
    Ok(())
}

/// Requires the caller to be the protocol owner
pub fn require_owner(owner: Address, caller: Address) -> StEduResult<()> {
    if caller != owner {
        return Err(StEduError::Unauthorized {
            expected: owner,
            actual: caller,
        });
    }
    Ok(())
}

/// Requires the protocol not to be paused
pub fn require_not_paused(paused: bool) -> StEduResult<()> {
    if paused {
        return Err(StEduError::ProtocolPaused);
    }
    Ok(())
}

/// Requires a non-zero address
pub fn require_valid_address(address: Address, reason: &'static str) -> StEduResult<()> {
    if address == ZERO_ADDRESS {
        return Err(StEduError::InvalidAddress { reason });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::derive_address;

    #[test]
    fn test_amount_checks() {
        assert!(require_nonzero_assets(1).is_ok());
        assert_eq!(require_nonzero_assets(0), Err(StEduError::ZeroAmount));
        assert!(require_nonzero_shares(1).is_ok());
        assert_eq!(require_nonzero_shares(0), Err(StEduError::ZeroShares));
    }

    #[test]
    fn test_balance_check() {
        assert!(require_sufficient_balance(10, 10).is_ok());
        assert_eq!(
            require_sufficient_balance(9, 10),
            Err(StEduError::InsufficientBalance {
                available: 9,
                requested: 10
            })
        );
    }

    #[test]
    fn test_owner_check() {
        let owner = derive_address(b"owner");
        let intruder = derive_address(b"intruder");

        assert!(require_owner(owner, owner).is_ok());
        assert_eq!(
            require_owner(owner, intruder),
            Err(StEduError::Unauthorized {
                expected: owner,
                actual: intruder
            })
        );
    }

    #[test]
    fn test_pause_and_address_checks() {
        assert!(require_not_paused(false).is_ok());
        assert_eq!(require_not_paused(true), Err(StEduError::ProtocolPaused));

        assert!(require_valid_address(derive_address(b"x"), "recipient").is_ok());
        assert_eq!(
            require_valid_address(ZERO_ADDRESS, "recipient"),
            Err(StEduError::InvalidAddress {
                reason: "recipient"
            })
        );
    }
}
