//! Asset Custody Capability
//!
//! The ledger holds the underlying asset through this two-operation
//! capability rather than binding to a concrete token or native-value
//! implementation. Incoming value is credited (payable-call model: the
//! assets have already arrived when the ledger logic runs); outgoing value
//! is paid out last, after all internal state is finalized.
//!
//! `pay_out` hands the implementation a mutable reference to the ledger.
//! That is deliberate: a transfer hook is exactly where a hostile recipient
//! would try to reenter, and the guard layer must reject the nested call.

use stedu_common::errors::{StEduError, StEduResult};
use stedu_common::math::safe_add;
use stedu_common::types::Address;

use crate::ledger::LedgerState;

/// Capability interface over the underlying asset held in custody
pub trait AssetCustody {
    /// Takes `amount` of the underlying into custody from `from`.
    ///
    /// In a payable-call model the value has already been received; this
    /// records it. Failure must leave custody unchanged.
    fn credit(&mut self, from: Address, amount: u64) -> StEduResult<()>;

    /// Pays `amount` of the underlying out to `to`.
    ///
    /// Runs after the ledger has finalized its state; the `ledger`
    /// reference exists so implementations can model transfer hooks that
    /// call back into the protocol. A failure aborts the whole mutating
    /// call.
    fn pay_out(
        &mut self,
        ledger: &mut LedgerState,
        to: Address,
        amount: u64,
    ) -> StEduResult<()>;

    /// True asset balance currently in custody
    fn balance(&self) -> u64;
}

/// In-memory custody: a plain held balance.
///
/// Serves as the reference implementation and the test transport. The
/// `donate` path models a transfer that reaches custody outside the
/// stake/reward entry points, which only `sync` can fold in.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryCustody {
    held: u64,
}

impl MemoryCustody {
    /// Creates empty custody
    pub fn new() -> Self {
        Self::default()
    }

    /// Receives value outside the ledger's accounting (a donation or
    /// misdirected transfer); only a later `sync` reconciles it
    pub fn donate(&mut self, amount: u64) -> StEduResult<()> {
        self.held = safe_add(self.held, amount)?;
        Ok(())
    }
}

impl AssetCustody for MemoryCustody {
    fn credit(&mut self, _from: Address, amount: u64) -> StEduResult<()> {
        self.held = safe_add(self.held, amount)?;
        Ok(())
    }

    fn pay_out(
        &mut self,
        _ledger: &mut LedgerState,
        to: Address,
        amount: u64,
    ) -> StEduResult<()> {
        if self.held < amount {
            return Err(StEduError::TransferFailed { to, amount });
        }
        self.held -= amount;
        Ok(())
    }

    fn balance(&self) -> u64 {
        self.held
    }
}
