//! Protocol Events for stEDU
//!
//! Every mutating ledger operation emits one fact record carrying the
//! literal amounts used in its invariant checks. The log is the audit
//! surface: indexers, the test suite, and the wrapper token all consume it.

use crate::types::Address;
use crate::Vec;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Event types for indexing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    // Ledger Events (0x01 - 0x1F)
    Staked = 0x01,
    Unstaked = 0x02,
    RewardsDeposited = 0x03,
    SurplusSynced = 0x04,
    AdminWithdrawal = 0x05,
    DelegateChanged = 0x06,

    // Share Events (0x20 - 0x3F)
    SharesTransferred = 0x20,

    // Protocol Events (0x80 - 0x9F)
    ProtocolPaused = 0x80,
    ProtocolUnpaused = 0x81,
    OwnershipTransferred = 0x82,
}

/// Main event enum containing all possible protocol events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum StEduEvent {
    // ============ Ledger Events ============

    /// Emitted when EDU is staked for stEDU shares
    Staked {
        staker: Address,
        assets: u64,
        shares: u64,
        timestamp: u64,
    },

    /// Emitted when stEDU shares are redeemed for EDU
    Unstaked {
        staker: Address,
        assets: u64,
        shares: u64,
        timestamp: u64,
    },

    /// Emitted when the owner injects yield, lifting the index
    RewardsDeposited {
        caller: Address,
        amount: u64,
        new_index: u128,
        timestamp: u64,
    },

    /// Emitted when an out-of-band surplus is folded into the index
    SurplusSynced {
        caller: Address,
        surplus: u64,
        new_index: u128,
        timestamp: u64,
    },

    /// Emitted on an emergency asset extraction; the recorded balance is
    /// deliberately not adjusted
    AdminWithdrawal {
        recipient: Address,
        amount: u64,
        timestamp: u64,
    },

    /// Emitted when a holder changes its delegation pointer
    DelegateChanged {
        delegator: Address,
        delegatee: Address,
        timestamp: u64,
    },

    // ============ Share Events ============

    /// Emitted on a share transfer between holders
    SharesTransferred {
        from: Address,
        to: Address,
        shares: u64,
        timestamp: u64,
    },

    // ============ Protocol Events ============

    /// Emitted when the protocol is paused
    ProtocolPaused { by: Address, timestamp: u64 },

    /// Emitted when the protocol is unpaused
    ProtocolUnpaused { by: Address, timestamp: u64 },

    /// Emitted when ownership is handed over
    OwnershipTransferred {
        old_owner: Address,
        new_owner: Address,
        timestamp: u64,
    },
}

impl StEduEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Staked { .. } => EventType::Staked,
            Self::Unstaked { .. } => EventType::Unstaked,
            Self::RewardsDeposited { .. } => EventType::RewardsDeposited,
            Self::SurplusSynced { .. } => EventType::SurplusSynced,
            Self::AdminWithdrawal { .. } => EventType::AdminWithdrawal,
            Self::DelegateChanged { .. } => EventType::DelegateChanged,
            Self::SharesTransferred { .. } => EventType::SharesTransferred,
            Self::ProtocolPaused { .. } => EventType::ProtocolPaused,
            Self::ProtocolUnpaused { .. } => EventType::ProtocolUnpaused,
            Self::OwnershipTransferred { .. } => EventType::OwnershipTransferred,
        }
    }

    /// Get the timestamp when the event occurred
    pub fn timestamp(&self) -> u64 {
        match self {
            Self::Staked { timestamp, .. } => *timestamp,
            Self::Unstaked { timestamp, .. } => *timestamp,
            Self::RewardsDeposited { timestamp, .. } => *timestamp,
            Self::SurplusSynced { timestamp, .. } => *timestamp,
            Self::AdminWithdrawal { timestamp, .. } => *timestamp,
            Self::DelegateChanged { timestamp, .. } => *timestamp,
            Self::SharesTransferred { timestamp, .. } => *timestamp,
            Self::ProtocolPaused { timestamp, .. } => *timestamp,
            Self::ProtocolUnpaused { timestamp, .. } => *timestamp,
            Self::OwnershipTransferred { timestamp, .. } => *timestamp,
        }
    }

    /// Serialize event to bytes for storage/transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Event log for collecting multiple events during execution
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<StEduEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (add to log)
    pub fn emit(&mut self, event: StEduEvent) {
        self.events.push(event);
    }

    /// Get all events
    pub fn events(&self) -> &[StEduEvent] {
        &self.events
    }

    /// Take ownership of all events
    pub fn into_events(self) -> Vec<StEduEvent> {
        self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&StEduEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Check if any events were emitted
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Get number of events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::derive_address;

    #[test]
    fn test_event_type() {
        let event = StEduEvent::Staked {
            staker: derive_address(b"alice"),
            assets: 10_00000000,
            shares: 10_00000000,
            timestamp: 1_700_000_000,
        };

        assert_eq!(event.event_type(), EventType::Staked);
        assert_eq!(event.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_event_serialization() {
        let event = StEduEvent::RewardsDeposited {
            caller: derive_address(b"owner"),
            amount: 10_00000000,
            new_index: 1_100_000_000_000_000_000,
            timestamp: 1_700_000_100,
        };

        let bytes = event.to_bytes();
        let restored = StEduEvent::from_bytes(&bytes).unwrap();

        assert_eq!(event, restored);
    }

    #[test]
    fn test_event_log() {
        let mut log = EventLog::new();
        let alice = derive_address(b"alice");

        log.emit(StEduEvent::Staked {
            staker: alice,
            assets: 100,
            shares: 100,
            timestamp: 1,
        });
        log.emit(StEduEvent::Unstaked {
            staker: alice,
            assets: 50,
            shares: 50,
            timestamp: 2,
        });

        assert_eq!(log.len(), 2);
        assert!(log.has_events());

        let staked = log.filter_by_type(EventType::Staked);
        assert_eq!(staked.len(), 1);
    }
}
