//! # Inbound Port - StakingApi
//!
//! Primary driving port exposing the staking ledger to callers.
//!
//! Depositor-facing operations act on behalf of the authenticated caller
//! address; admin/owner operations are authorized against the live
//! capability registry, never against possession of a credential value.

use crate::domain::{
    Address, AdminCap, Balance, EmergencyReceipt, PoolStats, RejectedDeposit, StakePosition,
    StakeReceipt, StakingError, WithdrawalReceipt,
};

/// Primary API for the staking ledger.
///
/// Every mutating method is a single atomic step: a failed precondition
/// rejects the call with no partial mutation, and `&mut self` serializes
/// calls against the one live pool.
pub trait StakingApi {
    /// Takes custody of `deposit`, locked for `lock_days` (30, 60 or 90).
    ///
    /// # Errors
    /// A `RejectedDeposit` carrying the untouched deposit and the reason:
    /// `ContractPaused`, `InvalidLockPeriod`, or `InsufficientAmount`.
    fn stake(
        &mut self,
        depositor: Address,
        deposit: Balance,
        lock_days: u64,
    ) -> Result<StakeReceipt, RejectedDeposit>;

    /// Withdraws a matured position in full. No penalty on this path.
    ///
    /// # Errors
    /// `ContractPaused`, `InvalidStakeId`, `AlreadyWithdrawn`, `StillLocked`.
    fn unstake(
        &mut self,
        depositor: Address,
        position_id: u64,
    ) -> Result<(Balance, WithdrawalReceipt), StakingError>;

    /// Exits a position before maturity, forfeiting the fixed penalty.
    ///
    /// # Errors
    /// `ContractPaused`, `InvalidStakeId`, `AlreadyWithdrawn`.
    fn emergency_unstake(
        &mut self,
        depositor: Address,
        position_id: u64,
    ) -> Result<(Balance, EmergencyReceipt), StakingError>;

    /// Engages the circuit breaker. Admin-gated.
    fn pause(&mut self, caller: Address) -> Result<(), StakingError>;

    /// Disengages the circuit breaker. Admin-gated.
    fn unpause(&mut self, caller: Address) -> Result<(), StakingError>;

    /// Delegates an admin seat (max 2). Owner-gated.
    fn delegate_admin(&mut self, caller: Address, admin: Address)
        -> Result<AdminCap, StakingError>;

    /// Removes an admin seat, revoking authority immediately. Owner-gated.
    fn remove_admin(&mut self, caller: Address, admin: Address) -> Result<(), StakingError>;

    /// Collects the accumulated penalty reserve. Owner-gated.
    fn collect_penalties(&mut self, caller: Address) -> Result<Balance, StakingError>;

    /// Every address that has ever staked.
    fn depositors(&self) -> Vec<Address>;

    /// All positions for `depositor`, any status; empty for unknown addresses.
    fn positions_of(&self, depositor: Address) -> Vec<StakePosition>;

    /// Only the ACTIVE positions for `depositor`.
    fn active_positions_of(&self, depositor: Address) -> Vec<StakePosition>;

    /// One position by depositor and id.
    fn position(&self, depositor: Address, position_id: u64) -> Option<StakePosition>;

    /// Aggregate pool statistics.
    fn stats(&self) -> PoolStats;

    /// Recomputes the books and reports the first mismatch, if any.
    fn verify_conservation(&self) -> Result<(), StakingError>;
}
