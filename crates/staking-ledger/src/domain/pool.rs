//! # Staking Pool - Custody Accounting and Position Lifecycle
//!
//! The aggregate root. One instance lives for the system's lifetime; every
//! public operation is a single atomic step taking `&mut self`, so calls
//! serialize by construction and no intermediate state is observable.
//!
//! ## Data Structures
//!
//! - `positions`: per-depositor ordered map, keyed by position id for
//!   O(log n) lookup (ids are monotonic, so map order is creation order)
//! - `depositors`: every address that has ever staked
//! - `custody`: all held asset units: active principal plus retained,
//!   not-yet-collected penalties
//!
//! ## Conservation
//!
//! Holds immediately before and after every call:
//!
//! - `custody.value() == total_staked + penalty_reserve`
//! - `total_staked == Σ amount` over ACTIVE positions, all depositors
//! - `next_position_id` strictly increases and is never reused
//!
//! Checked end-to-end by `verify_conservation()`.

use std::collections::{BTreeMap, BTreeSet};

use super::balance::Balance;
use super::capability::{AdminCap, CapabilityRegistry, OwnerCap};
use super::entities::{
    Address, LockPeriod, PositionStatus, StakePosition, Timestamp, EMERGENCY_PENALTY_PERCENT,
};
use super::errors::StakingError;
use super::value_objects::{
    EmergencyReceipt, PoolStats, RejectedDeposit, StakeReceipt, WithdrawalReceipt,
};

/// Time-locked custody pool for a single fungible asset.
#[derive(Debug)]
pub struct StakingPool {
    /// Owner and admin authorization record.
    registry: CapabilityRegistry,

    /// Circuit breaker. Gates every depositor-facing mutation.
    paused: bool,

    /// Admin that engaged the breaker, while paused.
    paused_by: Option<Address>,

    /// All held units: active principal plus retained penalties.
    custody: Balance,

    /// Portion of custody earmarked as collected penalties.
    penalty_reserve: u64,

    /// Addresses that have ever staked. Never shrinks.
    depositors: BTreeSet<Address>,

    /// Positions per depositor, keyed by position id.
    positions: BTreeMap<Address, BTreeMap<u64, StakePosition>>,

    /// Sum of principal across all ACTIVE positions.
    total_staked: u64,

    /// Next position id to assign. Starts at 1, never reused.
    next_position_id: u64,

    /// Cumulative penalties across all time. Never decreases.
    total_penalty_collected: u64,
}

impl StakingPool {
    /// Creates the pool and issues the one owner credential.
    ///
    /// Counters are zeroed and the breaker starts disengaged.
    pub fn genesis(owner: Address) -> (Self, OwnerCap) {
        let pool = Self {
            registry: CapabilityRegistry::new(owner),
            paused: false,
            paused_by: None,
            custody: Balance::zero(),
            penalty_reserve: 0,
            depositors: BTreeSet::new(),
            positions: BTreeMap::new(),
            total_staked: 0,
            next_position_id: 1,
            total_penalty_collected: 0,
        };
        (pool, OwnerCap { owner })
    }

    // =========================================================================
    // STAKE / UNSTAKE / EMERGENCY UNSTAKE
    // =========================================================================

    /// Takes custody of `deposit`, locking it for `lock_days`.
    ///
    /// On rejection the untouched deposit travels back inside the error.
    ///
    /// # Errors
    /// - `ContractPaused` while the breaker is engaged
    /// - `InvalidLockPeriod` for day counts outside {30, 60, 90}
    /// - `InsufficientAmount` for a zero-value deposit
    pub fn stake(
        &mut self,
        depositor: Address,
        deposit: Balance,
        lock_days: u64,
        now_ms: Timestamp,
    ) -> Result<StakeReceipt, RejectedDeposit> {
        if self.paused {
            return Err(RejectedDeposit::new(deposit, StakingError::ContractPaused));
        }
        let period = match LockPeriod::from_days(lock_days) {
            Ok(period) => period,
            Err(reason) => return Err(RejectedDeposit::new(deposit, reason)),
        };
        let amount = deposit.value();
        if amount == 0 {
            return Err(RejectedDeposit::new(
                deposit,
                StakingError::InsufficientAmount,
            ));
        }

        let position_id = self.next_position_id;
        self.next_position_id += 1;

        let position = StakePosition::new(position_id, depositor, amount, period, now_ms);
        let receipt = StakeReceipt {
            position_id,
            depositor,
            amount,
            lock_seconds: period.seconds(),
            unlock_at_ms: position.unlock_at_ms,
        };

        self.depositors.insert(depositor);
        self.positions
            .entry(depositor)
            .or_default()
            .insert(position_id, position);
        self.total_staked += amount;
        self.custody.merge(deposit);

        Ok(receipt)
    }

    /// Releases a matured position's full principal back to the caller.
    ///
    /// # Errors
    /// - `ContractPaused` while the breaker is engaged
    /// - `InvalidStakeId` if the caller has no position with this id
    /// - `AlreadyWithdrawn` if the position already left ACTIVE
    /// - `StillLocked` before the unlock timestamp
    pub fn unstake(
        &mut self,
        depositor: Address,
        position_id: u64,
        now_ms: Timestamp,
    ) -> Result<(Balance, WithdrawalReceipt), StakingError> {
        self.ensure_not_paused()?;
        let position = Self::active_position_mut(&mut self.positions, depositor, position_id)?;
        if now_ms < position.unlock_at_ms {
            return Err(StakingError::StillLocked {
                position_id,
                unlock_at_ms: position.unlock_at_ms,
            });
        }

        position.status = PositionStatus::Withdrawn;
        let amount = position.amount;
        self.total_staked -= amount;
        // Cannot fail while custody conservation holds: custody covers
        // total_staked, which covered this amount a line ago.
        let payout = self.custody.split(amount)?;

        Ok((
            payout,
            WithdrawalReceipt {
                position_id,
                depositor,
                amount,
            },
        ))
    }

    /// Early exit from a lock: releases principal minus a fixed 10% floor
    /// penalty, which stays in custody awaiting treasury collection.
    ///
    /// Same preconditions as `unstake`, minus the maturity check.
    pub fn emergency_unstake(
        &mut self,
        depositor: Address,
        position_id: u64,
    ) -> Result<(Balance, EmergencyReceipt), StakingError> {
        self.ensure_not_paused()?;
        let position = Self::active_position_mut(&mut self.positions, depositor, position_id)?;

        let amount = position.amount;
        let penalty = emergency_penalty(amount);
        let returned = amount - penalty;

        position.status = PositionStatus::Emergency;
        position.penalty_paid = penalty;
        self.total_staked -= amount;
        self.penalty_reserve += penalty;
        self.total_penalty_collected += penalty;
        // Only the returned part leaves custody; the penalty stays behind,
        // re-earmarked from principal to the reserve.
        let payout = self.custody.split(returned)?;

        Ok((
            payout,
            EmergencyReceipt {
                position_id,
                depositor,
                returned,
                penalty,
            },
        ))
    }

    /// Looks up a mutable ACTIVE position, mapping absence and terminal
    /// states to their rejection reasons.
    fn active_position_mut(
        positions: &mut BTreeMap<Address, BTreeMap<u64, StakePosition>>,
        depositor: Address,
        position_id: u64,
    ) -> Result<&mut StakePosition, StakingError> {
        let position = positions
            .get_mut(&depositor)
            .and_then(|by_id| by_id.get_mut(&position_id))
            .ok_or(StakingError::InvalidStakeId { position_id })?;
        if !position.is_active() {
            return Err(StakingError::AlreadyWithdrawn { position_id });
        }
        Ok(position)
    }

    fn ensure_not_paused(&self) -> Result<(), StakingError> {
        if self.paused {
            return Err(StakingError::ContractPaused);
        }
        Ok(())
    }

    // =========================================================================
    // PAUSE CONTROLLER
    // =========================================================================

    /// Engages the circuit breaker. Admin-gated against the live registry.
    pub fn pause(&mut self, caller: Address) -> Result<(), StakingError> {
        self.registry.require_admin(caller)?;
        if self.paused {
            return Err(StakingError::AlreadyPaused);
        }
        self.paused = true;
        self.paused_by = Some(caller);
        Ok(())
    }

    /// Disengages the circuit breaker. Admin-gated against the live registry.
    pub fn unpause(&mut self, caller: Address) -> Result<(), StakingError> {
        self.registry.require_admin(caller)?;
        if !self.paused {
            return Err(StakingError::AlreadyUnpaused);
        }
        self.paused = false;
        self.paused_by = None;
        Ok(())
    }

    // =========================================================================
    // CAPABILITY REGISTRY
    // =========================================================================

    /// Delegates an admin seat. Owner-gated.
    pub fn delegate_admin(
        &mut self,
        caller: Address,
        admin: Address,
    ) -> Result<AdminCap, StakingError> {
        self.registry.delegate_admin(caller, admin)
    }

    /// Removes an admin seat, revoking its authority immediately. Owner-gated.
    pub fn remove_admin(&mut self, caller: Address, admin: Address) -> Result<(), StakingError> {
        self.registry.remove_admin(caller, admin)
    }

    // =========================================================================
    // TREASURY
    // =========================================================================

    /// Splits the whole penalty reserve out of custody and hands it to the
    /// owner. The cumulative penalty counter is unaffected.
    ///
    /// Owner-gated; allowed while paused, since the breaker only shields
    /// depositor-facing operations.
    pub fn collect_penalties(&mut self, caller: Address) -> Result<Balance, StakingError> {
        self.registry.require_owner(caller)?;
        let amount = self.penalty_reserve;
        self.penalty_reserve = 0;
        self.custody.split(amount)
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    /// Every address that has ever staked, in address order.
    pub fn depositors(&self) -> Vec<Address> {
        self.depositors.iter().copied().collect()
    }

    /// All positions for `depositor`, any status, in creation order.
    /// An unknown address yields an empty sequence, not an error.
    pub fn positions_of(&self, depositor: Address) -> Vec<StakePosition> {
        self.positions
            .get(&depositor)
            .map(|by_id| by_id.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Only the ACTIVE positions for `depositor`, in creation order.
    pub fn active_positions_of(&self, depositor: Address) -> Vec<StakePosition> {
        self.positions
            .get(&depositor)
            .map(|by_id| {
                by_id
                    .values()
                    .filter(|p| p.is_active())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// One position by depositor and id.
    pub fn position(&self, depositor: Address, position_id: u64) -> Option<&StakePosition> {
        self.positions
            .get(&depositor)
            .and_then(|by_id| by_id.get(&position_id))
    }

    /// Aggregate pool statistics.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            total_staked: self.total_staked,
            total_penalty_collected: self.total_penalty_collected,
            unique_depositors: self.depositors.len() as u64,
            penalty_reserve: self.penalty_reserve,
            paused: self.paused,
        }
    }

    /// The genesis owner address.
    pub fn owner(&self) -> Address {
        self.registry.owner()
    }

    /// Currently delegated admin addresses.
    pub fn admins(&self) -> &[Address] {
        self.registry.admins()
    }

    /// Circuit breaker state.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Admin that engaged the breaker, while paused.
    pub fn paused_by(&self) -> Option<Address> {
        self.paused_by
    }

    /// Units currently held in custody.
    pub fn custody_value(&self) -> u64 {
        self.custody.value()
    }

    /// Recomputes the books from first principles and compares them to the
    /// running totals.
    ///
    /// # Errors
    /// `ConservationViolated` naming the first mismatched ledger line.
    pub fn verify_conservation(&self) -> Result<(), StakingError> {
        let active_sum: u64 = self
            .positions
            .values()
            .flat_map(|by_id| by_id.values())
            .filter(|p| p.is_active())
            .map(|p| p.amount)
            .sum();
        if active_sum != self.total_staked {
            return Err(StakingError::ConservationViolated(format!(
                "active principal {} != total_staked {}",
                active_sum, self.total_staked
            )));
        }
        if self.custody.value() != self.total_staked + self.penalty_reserve {
            return Err(StakingError::ConservationViolated(format!(
                "custody {} != total_staked {} + penalty_reserve {}",
                self.custody.value(),
                self.total_staked,
                self.penalty_reserve
            )));
        }
        Ok(())
    }
}

/// Fixed-percentage penalty under integer floor division: a stake of 7
/// yields a penalty of 0, not a rounded 1. The u128 widening keeps the
/// product exact for any u64 amount.
pub fn emergency_penalty(amount: u64) -> u64 {
    ((amount as u128 * EMERGENCY_PENALTY_PERCENT as u128) / 100) as u64
}
