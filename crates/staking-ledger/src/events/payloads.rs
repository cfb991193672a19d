//! Notification payloads emitted by the ledger.
//!
//! Notifications form an append-only audit trail; the ledger itself never
//! consumes them.

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Timestamp};

/// A deposit was accepted and locked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetStakedPayload {
    pub depositor: Address,
    pub position_id: u64,
    pub amount: u64,
    pub lock_seconds: u64,
    pub unlock_at_ms: Timestamp,
}

/// A matured position was withdrawn in full.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUnstakedPayload {
    pub depositor: Address,
    pub position_id: u64,
    pub amount: u64,
}

/// A position was exited early, forfeiting a penalty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyAssetUnstakedPayload {
    pub depositor: Address,
    pub position_id: u64,
    pub returned: u64,
    pub penalty: u64,
}

/// The circuit breaker was engaged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPausedPayload {
    pub admin: Address,
    pub at_ms: Timestamp,
}

/// The circuit breaker was disengaged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractUnpausedPayload {
    pub admin: Address,
    pub at_ms: Timestamp,
}

/// An admin seat was delegated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDelegatedPayload {
    pub admin: Address,
    pub delegated_by: Address,
}

/// An admin seat was removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRemovedPayload {
    pub admin: Address,
    pub removed_by: Address,
}

/// The penalty reserve was collected by the owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyCollectedPayload {
    pub owner: Address,
    pub amount: u64,
    pub at_ms: Timestamp,
}

/// Every notification the ledger can emit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    AssetStaked(AssetStakedPayload),
    AssetUnstaked(AssetUnstakedPayload),
    EmergencyAssetUnstaked(EmergencyAssetUnstakedPayload),
    ContractPaused(ContractPausedPayload),
    ContractUnpaused(ContractUnpausedPayload),
    AdminDelegated(AdminDelegatedPayload),
    AdminRemoved(AdminRemovedPayload),
    PenaltyCollected(PenaltyCollectedPayload),
}

impl Notification {
    /// Stable name for logging and filtering.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AssetStaked(_) => "AssetStaked",
            Self::AssetUnstaked(_) => "AssetUnstaked",
            Self::EmergencyAssetUnstaked(_) => "EmergencyAssetUnstaked",
            Self::ContractPaused(_) => "ContractPaused",
            Self::ContractUnpaused(_) => "ContractUnpaused",
            Self::AdminDelegated(_) => "AdminDelegated",
            Self::AdminRemoved(_) => "AdminRemoved",
            Self::PenaltyCollected(_) => "PenaltyCollected",
        }
    }
}
