//! Value objects returned by pool operations.

use serde::{Deserialize, Serialize};

use super::balance::Balance;
use super::entities::{Address, Timestamp};
use super::errors::StakingError;

/// Outcome of an accepted `stake` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeReceipt {
    pub position_id: u64,
    pub depositor: Address,
    pub amount: u64,
    pub lock_seconds: u64,
    pub unlock_at_ms: Timestamp,
}

/// Outcome of an accepted `unstake` call. The full principal travels back
/// to the caller alongside this receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    pub position_id: u64,
    pub depositor: Address,
    pub amount: u64,
}

/// Outcome of an accepted `emergency_unstake` call.
///
/// `returned + penalty` always equals the position's principal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyReceipt {
    pub position_id: u64,
    pub depositor: Address,
    pub returned: u64,
    pub penalty: u64,
}

/// Aggregate pool statistics for the stats view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Sum of principal across all ACTIVE positions.
    pub total_staked: u64,
    /// Cumulative penalties collected across all time.
    pub total_penalty_collected: u64,
    /// Number of addresses that have ever staked.
    pub unique_depositors: u64,
    /// Penalties currently retained in custody, awaiting collection.
    pub penalty_reserve: u64,
    /// Circuit breaker state.
    pub paused: bool,
}

/// A deposit the pool refused to take custody of.
///
/// `stake` consumes the asset value; when a precondition fails the unit
/// count must not vanish with the error, so the untouched deposit rides
/// back to the caller next to the reason.
#[derive(Debug)]
pub struct RejectedDeposit {
    /// The deposit, exactly as submitted.
    pub deposit: Balance,
    /// Why the pool refused it.
    pub reason: StakingError,
}

impl RejectedDeposit {
    pub fn new(deposit: Balance, reason: StakingError) -> Self {
        Self { deposit, reason }
    }

    /// Splits the rejection into the returned asset and the reason.
    pub fn into_parts(self) -> (Balance, StakingError) {
        (self.deposit, self.reason)
    }
}

impl std::fmt::Display for RejectedDeposit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deposit rejected: {}", self.reason)
    }
}

impl std::error::Error for RejectedDeposit {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}
