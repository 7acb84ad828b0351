//! Deposit-Tranche Tracker
//!
//! Each stake appends a tranche: a record of the minted shares plus the
//! time after which those specific shares may be unstaked. Unstakes consume
//! tranches strictly oldest-first (FIFO), partially shrinking at most the
//! boundary tranche and never touching a still-locked one.
//!
//! The book is an index-addressed arena: a growable array plus a
//! first-active cursor, so consumption is O(tranches touched) without
//! pointer churn. Spent slots ahead of the cursor are compacted away once
//! they outnumber the live ones.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::staking::UNSTAKE_DELAY;
use crate::errors::{StEduError, StEduResult};
use crate::Vec;

/// A single deposit record: shares plus their unlock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Tranche {
    /// Shares minted by this deposit (shrinks under partial consumption)
    pub shares: u64,
    /// Timestamp after which these shares may be unstaked; fixed at
    /// creation, kept through partial consumption
    pub unlock_at: u64,
}

/// FIFO book of deposit tranches for one holder.
///
/// Invariant: `unlock_at` is non-decreasing along the live entries, because
/// tranches are appended in call order and a partially-consumed tranche
/// keeps its original `unlock_at`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct TrancheBook {
    entries: Vec<Tranche>,
    /// Index of the oldest live tranche
    head: usize,
}

impl TrancheBook {
    /// Creates an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tranche for a fresh deposit, unlocking `UNSTAKE_DELAY`
    /// after `now`
    pub fn push(&mut self, shares: u64, now: u64) {
        self.entries.push(Tranche {
            shares,
            unlock_at: now.saturating_add(UNSTAKE_DELAY),
        });
    }

    /// Sum of shares across tranches whose delay has elapsed.
    ///
    /// The book is time-ordered, so this is the prefix ending at the first
    /// still-locked tranche.
    pub fn unlocked_total(&self, now: u64) -> u64 {
        let mut total: u64 = 0;
        for tranche in &self.entries[self.head..] {
            if tranche.unlock_at > now {
                break;
            }
            total = total.saturating_add(tranche.shares);
        }
        total
    }

    /// Sum of shares across all live tranches, locked or not
    pub fn total(&self) -> u64 {
        self.entries[self.head..]
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.shares))
    }

    /// Consumes `amount` shares oldest-first.
    ///
    /// Fails with `StillLocked` when the unlocked prefix cannot cover the
    /// amount, even if locked tranches could; the call is all-or-nothing
    /// and a locked tranche is never touched. A partially drained boundary
    /// tranche keeps its `unlock_at`.
    pub fn consume(&mut self, amount: u64, now: u64) -> StEduResult<()> {
        let unlocked = self.unlocked_total(now);
        if unlocked < amount {
            return Err(StEduError::StillLocked {
                unlocked,
                requested: amount,
            });
        }

        let mut remaining = amount;
        while remaining > 0 {
            // unlocked >= amount was checked above, so the head tranche
            // here is always present and unlocked
            let tranche = &mut self.entries[self.head];
            debug_assert!(tranche.unlock_at <= now);

            if tranche.shares <= remaining {
                remaining -= tranche.shares;
                self.head += 1;
            } else {
                tranche.shares -= remaining;
                remaining = 0;
            }
        }

        self.compact();
        Ok(())
    }

    /// Number of live tranches
    pub fn len(&self) -> usize {
        self.entries.len() - self.head
    }

    /// Returns true if no live tranches remain
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over live tranches, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Tranche> {
        self.entries[self.head..].iter()
    }

    /// Drops spent slots once they outnumber live ones
    fn compact(&mut self) {
        if self.head > 0 && self.head >= self.entries.len() - self.head {
            self.entries.drain(..self.head);
            self.head = 0;
        }
    }
}
