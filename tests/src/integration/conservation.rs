//! # Conservation Properties
//!
//! Random call sequences against the pool must keep the books balanced
//! after every single step: custody equals active principal plus retained
//! penalties, and no unit is created or destroyed between the pool and the
//! callers' wallets.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use staking_ledger::domain::{emergency_penalty, Balance, StakingPool};
    use staking_ledger::Address;

    const OWNER: Address = [0x01; 20];

    const DEPOSITORS: [Address; 4] = [[0xA1; 20], [0xA2; 20], [0xA3; 20], [0xA4; 20]];

    #[derive(Clone, Debug)]
    enum Op {
        Stake { who: usize, amount: u64, lock_days: u64 },
        Unstake { who: usize, nth: usize },
        Emergency { who: usize, nth: usize },
        Advance { ms: u64 },
        Collect,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            // Mostly-valid stakes, with the occasional zero amount or odd
            // lock period to exercise rejection paths.
            (
                0..DEPOSITORS.len(),
                0u64..50_000,
                prop_oneof![Just(30u64), Just(60), Just(90), Just(45), Just(0)],
            )
                .prop_map(|(who, amount, lock_days)| Op::Stake {
                    who,
                    amount,
                    lock_days,
                }),
            (0..DEPOSITORS.len(), 0..12usize).prop_map(|(who, nth)| Op::Unstake { who, nth }),
            (0..DEPOSITORS.len(), 0..12usize).prop_map(|(who, nth)| Op::Emergency { who, nth }),
            (0u64..8_000_000_000).prop_map(|ms| Op::Advance { ms }),
            Just(Op::Collect),
        ]
    }

    /// Applies one op; returns units that flowed back out of custody.
    fn apply(pool: &mut StakingPool, now_ms: &mut u64, op: &Op) -> u64 {
        match *op {
            Op::Stake {
                who,
                amount,
                lock_days,
            } => match pool.stake(DEPOSITORS[who], Balance::issue(amount), lock_days, *now_ms) {
                Ok(_) => 0,
                // The rejected deposit rides back to the wallet.
                Err(rejected) => rejected.into_parts().0.value(),
            },
            Op::Unstake { who, nth } => {
                let depositor = DEPOSITORS[who];
                let target = pool.positions_of(depositor).get(nth).map(|p| p.position_id);
                match target {
                    Some(id) => pool
                        .unstake(depositor, id, *now_ms)
                        .map(|(payout, _)| payout.value())
                        .unwrap_or(0),
                    None => 0,
                }
            }
            Op::Emergency { who, nth } => {
                let depositor = DEPOSITORS[who];
                let target = pool.positions_of(depositor).get(nth).map(|p| p.position_id);
                match target {
                    Some(id) => pool
                        .emergency_unstake(depositor, id)
                        .map(|(payout, _)| payout.value())
                        .unwrap_or(0),
                    None => 0,
                }
            }
            Op::Advance { ms } => {
                *now_ms += ms;
                0
            }
            Op::Collect => pool
                .collect_penalties(OWNER)
                .map(|b| b.value())
                .unwrap_or(0),
        }
    }

    proptest! {
        /// Internal books balance and external units are conserved after
        /// every step of any call sequence.
        #[test]
        fn conservation_holds_across_any_call_sequence(
            ops in prop::collection::vec(op_strategy(), 1..80)
        ) {
            let (mut pool, _owner_cap) = StakingPool::genesis(OWNER);
            let mut now_ms: u64 = 0;
            let mut issued: u64 = 0;
            let mut wallets: u64 = 0;

            for op in &ops {
                if let Op::Stake { amount, .. } = op {
                    issued += amount;
                }
                wallets += apply(&mut pool, &mut now_ms, op);

                pool.verify_conservation().unwrap();
                prop_assert_eq!(pool.custody_value() + wallets, issued);
            }
        }

        /// Emergency split is exact for any amount.
        #[test]
        fn emergency_split_is_exact(amount in 1u64..u64::MAX) {
            let penalty = emergency_penalty(amount);
            let returned = amount - penalty;
            prop_assert_eq!(returned + penalty, amount);
            prop_assert_eq!(penalty, ((amount as u128) * 10 / 100) as u64);
            prop_assert!(penalty <= amount / 10 + 1);
        }

        /// Position ids never repeat, whatever the traffic shape.
        #[test]
        fn position_ids_are_unique_and_increasing(
            stakes in prop::collection::vec((0..4usize, 1u64..1000), 1..40)
        ) {
            let (mut pool, _owner_cap) = StakingPool::genesis(OWNER);
            let mut last_id = 0;
            for (who, amount) in stakes {
                let receipt = pool
                    .stake(DEPOSITORS[who], Balance::issue(amount), 30, 0)
                    .unwrap();
                prop_assert!(receipt.position_id > last_id);
                last_id = receipt.position_id;
            }
        }
    }
}
