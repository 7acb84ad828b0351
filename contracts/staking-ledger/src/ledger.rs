//! Ledger Core
//!
//! The single owned aggregate holding the global exchange index, total
//! shares, recorded underlying balance, and every holder's record. All
//! mutation funnels through the methods here so the conservation
//! invariants hold at every quiescent point:
//!
//! - `total_shares` equals the sum of all holder share balances
//! - `recorded_balance` equals the true custody balance, except strictly
//!   between an `admin_withdraw` and the next successful `sync`
//! - `index` never decreases
//!
//! Mutating entry points check pause/auth/reentrancy first, mutate state
//! through the fixed-point helpers, and perform any asset transfer last.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use stedu_common::constants::precision::INITIAL_INDEX;
use stedu_common::errors::{StEduError, StEduResult};
use stedu_common::events::{EventLog, StEduEvent};
use stedu_common::math::{assets_for, index_gain, safe_add, safe_sub, shares_for};
use stedu_common::types::{Address, Holder};
use stedu_common::validation::{
    require_nonzero_assets, require_nonzero_shares, require_not_paused, require_owner,
    require_sufficient_balance, require_valid_address,
};

use crate::custody::AssetCustody;

/// Global ledger state for the stEDU protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct LedgerState {
    /// Protocol owner; sole caller of rewards, pause, and the emergency
    /// path
    pub owner: Address,
    /// Pause switch; disables every mutating entry point except the
    /// emergency path
    pub paused: bool,
    /// Contract-wide reentrancy flag; held across any external transfer
    entered: bool,
    /// Global exchange index, scaled by 1e18; non-decreasing
    pub index: u128,
    /// Total stEDU shares outstanding
    pub total_shares: u64,
    /// The ledger's belief about how much EDU custody holds
    pub recorded_balance: u64,
    /// Per-address holder records, created lazily on first stake
    holders: BTreeMap<Address, Holder>,
}

impl LedgerState {
    /// Creates a fresh ledger with index 1.0 and no stakes
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            paused: false,
            entered: false,
            index: INITIAL_INDEX,
            total_shares: 0,
            recorded_balance: 0,
            holders: BTreeMap::new(),
        }
    }

    // ========================================================================
    // Staking
    // ========================================================================

    /// Stakes `assets` EDU for `staker`, minting shares at the current
    /// index and recording a deposit tranche that unlocks after the
    /// unbonding delay. Returns the shares minted.
    pub fn stake(
        &mut self,
        custody: &mut dyn AssetCustody,
        staker: Address,
        assets: u64,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<u64> {
        // 1. Guards
        require_not_paused(self.paused)?;
        require_nonzero_assets(assets)?;

        // 2. All checked arithmetic before any effect
        let shares = shares_for(assets, self.index)?;
        let new_total_shares = safe_add(self.total_shares, shares)?;
        let new_recorded = safe_add(self.recorded_balance, assets)?;

        // 3. Take the assets into custody (payable model: value already
        //    sent with the call)
        custody.credit(staker, assets)?;

        // 4. Commit
        let holder = self.holders.entry(staker).or_insert_with(Holder::new);
        holder.tranches.push(shares, now);
        holder.share_balance += shares;
        self.total_shares = new_total_shares;
        self.recorded_balance = new_recorded;

        // 5. Emit event
        events.emit(StEduEvent::Staked {
            staker,
            assets,
            shares,
            timestamp: now,
        });

        Ok(shares)
    }

    /// Redeems `shares` for EDU at the current index. The shares must be
    /// covered by the staker's unlocked tranches, consumed oldest-first.
    /// Returns the assets paid out.
    ///
    /// All internal state is finalized before the payout; a payout failure
    /// rolls the call back completely.
    pub fn unstake(
        &mut self,
        custody: &mut dyn AssetCustody,
        staker: Address,
        shares: u64,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<u64> {
        if self.entered {
            return Err(StEduError::ReentrantCall);
        }
        self.entered = true;
        let result = self.unstake_locked(custody, staker, shares, now, events);
        self.entered = false;
        result
    }

    fn unstake_locked(
        &mut self,
        custody: &mut dyn AssetCustody,
        staker: Address,
        shares: u64,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<u64> {
        // 1. Guards
        require_not_paused(self.paused)?;
        require_nonzero_shares(shares)?;
        require_sufficient_balance(self.share_balance_of(staker), shares)?;

        // 2. Checked conversion and balance math up front
        let assets = assets_for(shares, self.index)?;
        let new_recorded = safe_sub(self.recorded_balance, assets)?;
        let new_total_shares = safe_sub(self.total_shares, shares)?;

        // 3. Consume unlocked tranches oldest-first; fails StillLocked
        //    without touching anything
        let snapshot = {
            let holder = self
                .holders
                .get_mut(&staker)
                .ok_or(StEduError::InsufficientBalance {
                    available: 0,
                    requested: shares,
                })?;
            let snapshot = holder.tranches.clone();
            holder.tranches.consume(shares, now)?;
            holder.share_balance -= shares;
            snapshot
        };
        self.total_shares = new_total_shares;
        self.recorded_balance = new_recorded;

        // 4. External interaction last; on failure the whole call unwinds
        if let Err(err) = custody.pay_out(self, staker, assets) {
            self.total_shares += shares;
            self.recorded_balance += assets;
            if let Some(holder) = self.holders.get_mut(&staker) {
                holder.share_balance += shares;
                holder.tranches = snapshot;
            }
            return Err(err);
        }

        // 5. Emit event
        events.emit(StEduEvent::Unstaked {
            staker,
            assets,
            shares,
            timestamp: now,
        });

        Ok(assets)
    }

    // ========================================================================
    // Yield
    // ========================================================================

    /// Owner-only yield injection. Lifts the index by
    /// `amount * SCALE / total_shares`, making every outstanding share
    /// worth proportionally more. Returns the new index.
    pub fn deposit_rewards(
        &mut self,
        custody: &mut dyn AssetCustody,
        caller: Address,
        amount: u64,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<u128> {
        // 1. Guards
        require_not_paused(self.paused)?;
        require_owner(self.owner, caller)?;
        if amount == 0 {
            return Err(StEduError::NoReward);
        }
        if self.total_shares == 0 {
            return Err(StEduError::NothingStaked);
        }

        // 2. Checked arithmetic before any effect
        let gain = index_gain(amount, self.total_shares)?;
        let new_index = self.index.checked_add(gain).ok_or(StEduError::Overflow)?;
        let new_recorded = safe_add(self.recorded_balance, amount)?;

        // 3. Take the reward into custody, then commit
        custody.credit(caller, amount)?;
        self.index = new_index;
        self.recorded_balance = new_recorded;

        // 4. Emit event
        events.emit(StEduEvent::RewardsDeposited {
            caller,
            amount,
            new_index,
            timestamp: now,
        });

        Ok(new_index)
    }

    /// Folds an out-of-band surplus (custody balance above the recorded
    /// balance) into the index. Callable by anyone: the caller gains
    /// nothing personally, the value is distributed across all shares
    /// exactly like a reward deposit. Returns the surplus folded in.
    ///
    /// A deficit is not reconcilable here: custody at or below the
    /// recorded balance reports `NoSurplus`, and only a later reward or
    /// top-up restores parity after an emergency withdrawal.
    pub fn sync(
        &mut self,
        custody: &mut dyn AssetCustody,
        caller: Address,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<u64> {
        // 1. Guards
        require_not_paused(self.paused)?;
        let true_balance = custody.balance();
        if true_balance <= self.recorded_balance {
            return Err(StEduError::NoSurplus);
        }
        let surplus = true_balance - self.recorded_balance;
        if self.total_shares == 0 {
            return Err(StEduError::NothingStaked);
        }

        // 2. Same index-update formula as deposit_rewards
        let gain = index_gain(surplus, self.total_shares)?;
        self.index = self.index.checked_add(gain).ok_or(StEduError::Overflow)?;
        self.recorded_balance = true_balance;

        // 3. Emit event
        events.emit(StEduEvent::SurplusSynced {
            caller,
            surplus,
            new_index: self.index,
            timestamp: now,
        });

        Ok(surplus)
    }

    // ========================================================================
    // Emergency path
    // ========================================================================

    /// Owner-only emergency extraction, available even while paused.
    ///
    /// Deliberately does not adjust `recorded_balance`: the books diverge
    /// from custody until a later surplus sync or top-up. `sync` treats
    /// the resulting deficit as "no surplus" and cannot heal it.
    pub fn admin_withdraw(
        &mut self,
        custody: &mut dyn AssetCustody,
        caller: Address,
        recipient: Address,
        amount: u64,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<()> {
        if self.entered {
            return Err(StEduError::ReentrantCall);
        }
        self.entered = true;
        let result = self.admin_withdraw_locked(custody, caller, recipient, amount, now, events);
        self.entered = false;
        result
    }

    fn admin_withdraw_locked(
        &mut self,
        custody: &mut dyn AssetCustody,
        caller: Address,
        recipient: Address,
        amount: u64,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<()> {
        // 1. Guards; no pause check on the emergency path
        require_owner(self.owner, caller)?;
        require_valid_address(recipient, "withdrawal recipient must not be the zero address")?;
        require_sufficient_balance(custody.balance(), amount)?;

        // 2. Transfer; recorded_balance intentionally untouched
        custody.pay_out(self, recipient, amount)?;

        // 3. Emit event
        events.emit(StEduEvent::AdminWithdrawal {
            recipient,
            amount,
            timestamp: now,
        });

        Ok(())
    }

    // ========================================================================
    // Pause and ownership
    // ========================================================================

    /// Owner-only: halts every mutating entry point except the emergency
    /// path
    pub fn pause(&mut self, caller: Address, now: u64, events: &mut EventLog) -> StEduResult<()> {
        require_owner(self.owner, caller)?;
        if self.paused {
            return Err(StEduError::ProtocolPaused);
        }
        self.paused = true;
        events.emit(StEduEvent::ProtocolPaused {
            by: caller,
            timestamp: now,
        });
        Ok(())
    }

    /// Owner-only: lifts the pause
    pub fn unpause(&mut self, caller: Address, now: u64, events: &mut EventLog) -> StEduResult<()> {
        require_owner(self.owner, caller)?;
        if !self.paused {
            return Err(StEduError::NotPaused);
        }
        self.paused = false;
        events.emit(StEduEvent::ProtocolUnpaused {
            by: caller,
            timestamp: now,
        });
        Ok(())
    }

    /// Owner-only ownership handover
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<()> {
        require_owner(self.owner, caller)?;
        require_valid_address(new_owner, "new owner must not be the zero address")?;

        let old_owner = self.owner;
        self.owner = new_owner;

        events.emit(StEduEvent::OwnershipTransferred {
            old_owner,
            new_owner,
            timestamp: now,
        });
        Ok(())
    }

    // ========================================================================
    // Shares and delegation
    // ========================================================================

    /// ERC20-style share transfer, the surface the wrapper token consumes.
    ///
    /// Moves redeemable value only: deposit tranches stay with the
    /// original depositor, so transferred shares carry no unbonding
    /// records and cannot back an unstake by the recipient.
    pub fn transfer_shares(
        &mut self,
        from: Address,
        to: Address,
        shares: u64,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<()> {
        require_not_paused(self.paused)?;
        require_nonzero_shares(shares)?;
        require_valid_address(to, "transfer recipient must not be the zero address")?;
        require_sufficient_balance(self.share_balance_of(from), shares)?;

        let recipient_balance = self.share_balance_of(to);
        let new_recipient_balance = safe_add(recipient_balance, shares)?;

        if from != to {
            if let Some(holder) = self.holders.get_mut(&from) {
                holder.share_balance -= shares;
            }
            let recipient = self.holders.entry(to).or_insert_with(Holder::new);
            recipient.share_balance = new_recipient_balance;
        }

        events.emit(StEduEvent::SharesTransferred {
            from,
            to,
            shares,
            timestamp: now,
        });
        Ok(())
    }

    /// Records a delegation pointer for `delegator`. Pure bookkeeping; no
    /// entity in the ledger depends on it.
    pub fn delegate(
        &mut self,
        delegator: Address,
        delegatee: Address,
        now: u64,
        events: &mut EventLog,
    ) -> StEduResult<()> {
        require_not_paused(self.paused)?;
        require_valid_address(delegatee, "delegatee must not be the zero address")?;

        let holder = self.holders.entry(delegator).or_insert_with(Holder::new);
        holder.delegate = Some(delegatee);

        events.emit(StEduEvent::DelegateChanged {
            delegator,
            delegatee,
            timestamp: now,
        });
        Ok(())
    }

    // ========================================================================
    // Disabled vault-style entries
    // ========================================================================

    /// Generic vault-style deposit. Always fails: shares are only minted
    /// through `stake`, which records the deposit tranche.
    pub fn deposit(&mut self, _assets: u64, _receiver: Address) -> StEduResult<u64> {
        Err(StEduError::DirectEntryDisabled)
    }

    /// Generic vault-style withdrawal. Always fails: shares are only
    /// burned through `unstake`, which consumes unlocked tranches.
    pub fn withdraw(&mut self, _assets: u64, _receiver: Address) -> StEduResult<u64> {
        Err(StEduError::DirectEntryDisabled)
    }

    // ========================================================================
    // Read-only queries
    // ========================================================================

    /// EDU value of `shares` at the current index
    pub fn value_of(&self, shares: u64) -> StEduResult<u64> {
        assets_for(shares, self.index)
    }

    /// Shares minted for `assets` at the current index
    pub fn shares_for_value(&self, assets: u64) -> StEduResult<u64> {
        shares_for(assets, self.index)
    }

    /// Total EDU the ledger believes it holds
    pub fn total_assets(&self) -> u64 {
        self.recorded_balance
    }

    /// stEDU share balance of `holder`
    pub fn share_balance_of(&self, holder: Address) -> u64 {
        self.holders
            .get(&holder)
            .map(|h| h.share_balance)
            .unwrap_or(0)
    }

    /// Shares of `holder` whose unbonding delay has elapsed at `now`
    pub fn unlocked_shares_of(&self, holder: Address, now: u64) -> u64 {
        self.holders
            .get(&holder)
            .map(|h| h.tranches.unlocked_total(now))
            .unwrap_or(0)
    }

    /// Number of live deposit tranches for `holder`
    pub fn tranche_count_of(&self, holder: Address) -> usize {
        self.holders.get(&holder).map(|h| h.tranches.len()).unwrap_or(0)
    }

    /// Current delegation pointer of `holder`, if any
    pub fn delegate_of(&self, holder: Address) -> Option<Address> {
        self.holders.get(&holder).and_then(|h| h.delegate)
    }

    /// Sum of every holder's share balance; equals `total_shares` at
    /// every quiescent point
    pub fn holder_share_sum(&self) -> u64 {
        self.holders
            .values()
            .fold(0u64, |acc, h| acc.saturating_add(h.share_balance))
    }
}
