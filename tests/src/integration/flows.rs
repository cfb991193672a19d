//! # End-to-End Ledger Flows
//!
//! Drives the full stack (service + manual clock + audit log) through
//! realistic sessions: genesis, admin delegation, staking traffic, the
//! pause breaker, emergency exits, and treasury collection. Every flow
//! finishes with a conservation audit.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use staking_ledger::adapters::{InMemoryAuditLog, ManualTimeSource};
    use staking_ledger::domain::{Balance, PositionStatus};
    use staking_ledger::events::Notification;
    use staking_ledger::ports::StakingApi;
    use staking_ledger::service::StakingService;
    use staking_ledger::{Address, StakingError};

    const OWNER: Address = [0x01; 20];
    const ADMIN_A: Address = [0x02; 20];
    const ADMIN_B: Address = [0x03; 20];
    const ADMIN_C: Address = [0x04; 20];
    const ALICE: Address = [0xAA; 20];
    const BOB: Address = [0xBB; 20];
    const CAROL: Address = [0xCC; 20];

    const DAY_MS: u64 = 86_400_000;

    type Ledger = StakingService<ManualTimeSource, InMemoryAuditLog>;

    fn genesis() -> (Ledger, Arc<ManualTimeSource>, Arc<InMemoryAuditLog>) {
        let clock = Arc::new(ManualTimeSource::new(0));
        let log = Arc::new(InMemoryAuditLog::new());
        let (ledger, owner_cap) = StakingService::new(OWNER, clock.clone(), log.clone());
        assert_eq!(owner_cap.owner, OWNER);
        (ledger, clock, log)
    }

    // =========================================================================
    // GENESIS
    // =========================================================================

    #[test]
    fn test_genesis_starts_zeroed_and_unpaused() {
        let (ledger, _clock, log) = genesis();
        let stats = ledger.stats();
        assert_eq!(stats.total_staked, 0);
        assert_eq!(stats.total_penalty_collected, 0);
        assert_eq!(stats.unique_depositors, 0);
        assert_eq!(stats.penalty_reserve, 0);
        assert!(!stats.paused);
        assert!(ledger.depositors().is_empty());
        assert!(log.is_empty());
        ledger.verify_conservation().unwrap();
    }

    // =========================================================================
    // MATURED WITHDRAWAL
    // =========================================================================

    #[test]
    fn test_thirty_day_stake_matures_and_withdraws_in_full() {
        let (mut ledger, clock, _log) = genesis();

        // Stake 1000 units for 30 days at t=0.
        let receipt = ledger.stake(ALICE, Balance::issue(1000), 30).unwrap();
        assert_eq!(receipt.position_id, 1);
        assert_eq!(receipt.unlock_at_ms, 2_592_000_000);

        // One millisecond early: still locked.
        clock.set(2_591_999_999);
        assert!(matches!(
            ledger.unstake(ALICE, 1),
            Err(StakingError::StillLocked { .. })
        ));

        // Exactly at the unlock timestamp: full principal, no penalty.
        clock.set(2_592_000_000);
        let (payout, _) = ledger.unstake(ALICE, 1).unwrap();
        assert_eq!(payout.value(), 1000);
        assert_eq!(ledger.stats().total_staked, 0);
        ledger.verify_conservation().unwrap();
    }

    // =========================================================================
    // EMERGENCY EXIT
    // =========================================================================

    #[test]
    fn test_immediate_emergency_exit_pays_ten_percent() {
        let (mut ledger, _clock, _log) = genesis();

        ledger.stake(ALICE, Balance::issue(1000), 60).unwrap();
        let (payout, receipt) = ledger.emergency_unstake(ALICE, 1).unwrap();

        assert_eq!(receipt.penalty, 100);
        assert_eq!(receipt.returned, 900);
        assert_eq!(payout.value(), 900);

        let stats = ledger.stats();
        assert_eq!(stats.total_penalty_collected, 100);
        assert_eq!(stats.penalty_reserve, 100);
        ledger.verify_conservation().unwrap();
    }

    #[test]
    fn test_tiny_stake_emergency_exit_floors_penalty_to_zero() {
        let (mut ledger, _clock, _log) = genesis();

        ledger.stake(BOB, Balance::issue(7), 30).unwrap();
        let (payout, receipt) = ledger.emergency_unstake(BOB, 1).unwrap();

        assert_eq!(receipt.penalty, 0);
        assert_eq!(payout.value(), 7);
        assert_eq!(ledger.stats().total_penalty_collected, 0);
        ledger.verify_conservation().unwrap();
    }

    // =========================================================================
    // ADMIN LIFECYCLE AND THE BREAKER
    // =========================================================================

    #[test]
    fn test_admin_lifecycle_ceiling_and_revocation() {
        let (mut ledger, _clock, _log) = genesis();

        ledger.delegate_admin(OWNER, ADMIN_A).unwrap();
        assert!(matches!(
            ledger.delegate_admin(OWNER, ADMIN_A),
            Err(StakingError::AdminAlreadyPresent)
        ));

        ledger.delegate_admin(OWNER, ADMIN_B).unwrap();
        assert!(matches!(
            ledger.delegate_admin(OWNER, ADMIN_C),
            Err(StakingError::AdminCeilingReached)
        ));

        // Removing a seat frees it and revokes authority at once.
        ledger.remove_admin(OWNER, ADMIN_A).unwrap();
        assert!(matches!(
            ledger.pause(ADMIN_A),
            Err(StakingError::NotAdmin)
        ));
        ledger.delegate_admin(OWNER, ADMIN_C).unwrap();
        assert!(ledger.pause(ADMIN_C).is_ok());
    }

    #[test]
    fn test_pause_freezes_traffic_until_unpause() {
        let (mut ledger, clock, _log) = genesis();
        ledger.delegate_admin(OWNER, ADMIN_A).unwrap();
        ledger.stake(ALICE, Balance::issue(500), 30).unwrap();

        ledger.pause(ADMIN_A).unwrap();

        // Deposits bounce and hand the asset back.
        let rejected = ledger.stake(BOB, Balance::issue(100), 30).unwrap_err();
        let (deposit, reason) = rejected.into_parts();
        assert_eq!(deposit.value(), 100);
        assert_eq!(reason, StakingError::ContractPaused);

        // Withdrawals bounce too, even matured ones.
        clock.set(40 * DAY_MS);
        assert!(matches!(
            ledger.unstake(ALICE, 1),
            Err(StakingError::ContractPaused)
        ));

        // Views keep answering while paused.
        assert_eq!(ledger.positions_of(ALICE).len(), 1);
        assert!(ledger.stats().paused);

        ledger.unpause(ADMIN_A).unwrap();
        let (payout, _) = ledger.unstake(ALICE, 1).unwrap();
        assert_eq!(payout.value(), 500);
        ledger.verify_conservation().unwrap();
    }

    // =========================================================================
    // MULTI-DEPOSITOR SESSION
    // =========================================================================

    #[test]
    fn test_mixed_session_conserves_every_unit() {
        let (mut ledger, clock, _log) = genesis();
        ledger.delegate_admin(OWNER, ADMIN_A).unwrap();

        // External conservation: what left wallets must equal custody plus
        // what returned to wallets, at every step.
        let issued: u64 = 1000 + 2500 + 333 + 7;
        let mut wallets: u64 = 0;

        ledger.stake(ALICE, Balance::issue(1000), 30).unwrap();
        ledger.stake(BOB, Balance::issue(2500), 60).unwrap();
        clock.advance(DAY_MS);
        ledger.stake(ALICE, Balance::issue(333), 90).unwrap();
        ledger.stake(CAROL, Balance::issue(7), 30).unwrap();

        assert_eq!(ledger.stats().unique_depositors, 3);
        assert_eq!(ledger.pool().custody_value(), issued);
        ledger.verify_conservation().unwrap();

        // Bob bails out early: 250 penalty stays behind.
        let (payout, receipt) = ledger.emergency_unstake(BOB, 2).unwrap();
        wallets += payout.value();
        assert_eq!(receipt.penalty, 250);
        assert_eq!(ledger.pool().custody_value() + wallets, issued);
        ledger.verify_conservation().unwrap();

        // Alice's first stake matures.
        clock.set(31 * DAY_MS);
        let (payout, _) = ledger.unstake(ALICE, 1).unwrap();
        wallets += payout.value();
        assert_eq!(ledger.pool().custody_value() + wallets, issued);

        // Carol's tiny stake matures too.
        let (payout, _) = ledger.unstake(CAROL, 4).unwrap();
        wallets += payout.value();

        // Owner sweeps the penalty reserve.
        let collected = ledger.collect_penalties(OWNER).unwrap();
        wallets += collected.value();
        assert_eq!(collected.value(), 250);

        // Only Alice's 90-day position remains in custody.
        assert_eq!(ledger.pool().custody_value(), 333);
        assert_eq!(ledger.pool().custody_value() + wallets, issued);
        assert_eq!(ledger.stats().total_staked, 333);
        assert_eq!(ledger.stats().total_penalty_collected, 250);
        ledger.verify_conservation().unwrap();

        // History survives: all four positions still listed.
        assert_eq!(ledger.positions_of(ALICE).len(), 2);
        assert_eq!(ledger.positions_of(BOB).len(), 1);
        assert_eq!(
            ledger.positions_of(BOB)[0].status,
            PositionStatus::Emergency
        );
    }

    // =========================================================================
    // AUDIT TRAIL
    // =========================================================================

    #[test]
    fn test_audit_log_mirrors_the_session() {
        let (mut ledger, clock, log) = genesis();
        ledger.delegate_admin(OWNER, ADMIN_A).unwrap();
        ledger.stake(ALICE, Balance::issue(1000), 30).unwrap();
        ledger.emergency_unstake(ALICE, 1).unwrap();
        clock.advance(5000);
        ledger.pause(ADMIN_A).unwrap();
        ledger.unpause(ADMIN_A).unwrap();

        let names: Vec<_> = log.entries().iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec![
                "AdminDelegated",
                "AssetStaked",
                "EmergencyAssetUnstaked",
                "ContractPaused",
                "ContractUnpaused",
            ]
        );

        // Rejected calls leave no trace in the trail.
        let before = log.len();
        let _ = ledger.stake(ALICE, Balance::issue(10), 45).unwrap_err();
        let _ = ledger.unstake(ALICE, 99).unwrap_err();
        assert_eq!(log.len(), before);
    }

    #[test]
    fn test_emergency_event_carries_the_exact_split() {
        let (mut ledger, _clock, log) = genesis();
        ledger.stake(ALICE, Balance::issue(12345), 90).unwrap();
        ledger.emergency_unstake(ALICE, 1).unwrap();

        match log.entries().last().unwrap() {
            Notification::EmergencyAssetUnstaked(payload) => {
                assert_eq!(payload.penalty, 1234);
                assert_eq!(payload.returned, 11111);
                assert_eq!(payload.returned + payload.penalty, 12345);
            }
            other => panic!("unexpected notification: {}", other.name()),
        }
    }
}
