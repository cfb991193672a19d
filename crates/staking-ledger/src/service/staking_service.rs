//! Staking service.
//!
//! Orchestrates the pool aggregate with the clock and notification
//! collaborators: reads time once per call, applies the domain operation,
//! then logs and publishes the matching notification. All event emission
//! lives here so the domain stays pure.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    Address, AdminCap, Balance, EmergencyReceipt, OwnerCap, PoolStats, RejectedDeposit,
    StakePosition, StakeReceipt, StakingError, StakingPool, WithdrawalReceipt,
};
use crate::events::{
    AdminDelegatedPayload, AdminRemovedPayload, AssetStakedPayload, AssetUnstakedPayload,
    ContractPausedPayload, ContractUnpausedPayload, EmergencyAssetUnstakedPayload, Notification,
    PenaltyCollectedPayload,
};
use crate::ports::{NotificationSink, StakingApi, TimeSource};

/// The staking ledger behind its driving port.
///
/// Owns the one live pool; `&mut self` on every mutating operation gives
/// single-writer serialization per call.
pub struct StakingService<C: TimeSource, S: NotificationSink> {
    pool: StakingPool,
    clock: Arc<C>,
    sink: Arc<S>,
}

impl<C: TimeSource, S: NotificationSink> StakingService<C, S> {
    /// Genesis: constructs the pool and issues the one owner credential.
    pub fn new(owner: Address, clock: Arc<C>, sink: Arc<S>) -> (Self, OwnerCap) {
        let (pool, owner_cap) = StakingPool::genesis(owner);
        (Self { pool, clock, sink }, owner_cap)
    }

    /// Read access to the underlying pool.
    pub fn pool(&self) -> &StakingPool {
        &self.pool
    }
}

impl<C: TimeSource, S: NotificationSink> StakingApi for StakingService<C, S> {
    fn stake(
        &mut self,
        depositor: Address,
        deposit: Balance,
        lock_days: u64,
    ) -> Result<StakeReceipt, RejectedDeposit> {
        let now_ms = self.clock.now_ms();
        let receipt = self.pool.stake(depositor, deposit, lock_days, now_ms)?;
        info!(
            depositor = %hex::encode(depositor),
            position_id = receipt.position_id,
            amount = receipt.amount,
            lock_seconds = receipt.lock_seconds,
            "stake accepted"
        );
        self.sink
            .publish(Notification::AssetStaked(AssetStakedPayload {
                depositor,
                position_id: receipt.position_id,
                amount: receipt.amount,
                lock_seconds: receipt.lock_seconds,
                unlock_at_ms: receipt.unlock_at_ms,
            }));
        Ok(receipt)
    }

    fn unstake(
        &mut self,
        depositor: Address,
        position_id: u64,
    ) -> Result<(Balance, WithdrawalReceipt), StakingError> {
        let now_ms = self.clock.now_ms();
        let (payout, receipt) = self.pool.unstake(depositor, position_id, now_ms)?;
        info!(
            depositor = %hex::encode(depositor),
            position_id,
            amount = receipt.amount,
            "stake withdrawn"
        );
        self.sink
            .publish(Notification::AssetUnstaked(AssetUnstakedPayload {
                depositor,
                position_id,
                amount: receipt.amount,
            }));
        Ok((payout, receipt))
    }

    fn emergency_unstake(
        &mut self,
        depositor: Address,
        position_id: u64,
    ) -> Result<(Balance, EmergencyReceipt), StakingError> {
        let (payout, receipt) = self.pool.emergency_unstake(depositor, position_id)?;
        info!(
            depositor = %hex::encode(depositor),
            position_id,
            returned = receipt.returned,
            penalty = receipt.penalty,
            "emergency unstake"
        );
        self.sink.publish(Notification::EmergencyAssetUnstaked(
            EmergencyAssetUnstakedPayload {
                depositor,
                position_id,
                returned: receipt.returned,
                penalty: receipt.penalty,
            },
        ));
        Ok((payout, receipt))
    }

    fn pause(&mut self, caller: Address) -> Result<(), StakingError> {
        let at_ms = self.clock.now_ms();
        self.pool.pause(caller)?;
        info!(admin = %hex::encode(caller), at_ms, "contract paused");
        self.sink
            .publish(Notification::ContractPaused(ContractPausedPayload {
                admin: caller,
                at_ms,
            }));
        Ok(())
    }

    fn unpause(&mut self, caller: Address) -> Result<(), StakingError> {
        let at_ms = self.clock.now_ms();
        self.pool.unpause(caller)?;
        info!(admin = %hex::encode(caller), at_ms, "contract unpaused");
        self.sink
            .publish(Notification::ContractUnpaused(ContractUnpausedPayload {
                admin: caller,
                at_ms,
            }));
        Ok(())
    }

    fn delegate_admin(
        &mut self,
        caller: Address,
        admin: Address,
    ) -> Result<AdminCap, StakingError> {
        let cap = self.pool.delegate_admin(caller, admin)?;
        info!(admin = %hex::encode(admin), "admin delegated");
        self.sink
            .publish(Notification::AdminDelegated(AdminDelegatedPayload {
                admin,
                delegated_by: caller,
            }));
        Ok(cap)
    }

    fn remove_admin(&mut self, caller: Address, admin: Address) -> Result<(), StakingError> {
        self.pool.remove_admin(caller, admin)?;
        info!(admin = %hex::encode(admin), "admin removed");
        self.sink
            .publish(Notification::AdminRemoved(AdminRemovedPayload {
                admin,
                removed_by: caller,
            }));
        Ok(())
    }

    fn collect_penalties(&mut self, caller: Address) -> Result<Balance, StakingError> {
        let at_ms = self.clock.now_ms();
        let collected = self.pool.collect_penalties(caller)?;
        info!(amount = collected.value(), "penalty reserve collected");
        self.sink
            .publish(Notification::PenaltyCollected(PenaltyCollectedPayload {
                owner: caller,
                amount: collected.value(),
                at_ms,
            }));
        Ok(collected)
    }

    fn depositors(&self) -> Vec<Address> {
        self.pool.depositors()
    }

    fn positions_of(&self, depositor: Address) -> Vec<StakePosition> {
        self.pool.positions_of(depositor)
    }

    fn active_positions_of(&self, depositor: Address) -> Vec<StakePosition> {
        self.pool.active_positions_of(depositor)
    }

    fn position(&self, depositor: Address, position_id: u64) -> Option<StakePosition> {
        self.pool.position(depositor, position_id).cloned()
    }

    fn stats(&self) -> PoolStats {
        self.pool.stats()
    }

    fn verify_conservation(&self) -> Result<(), StakingError> {
        self.pool.verify_conservation()
    }
}
