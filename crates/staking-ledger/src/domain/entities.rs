//! Core domain entities for the staking ledger.
//!
//! Defines the position lifecycle state machine and the closed set of
//! accepted lock periods.

use serde::{Deserialize, Serialize};

use super::errors::StakingError;

/// Principal address, 20 bytes.
pub type Address = [u8; 20];

/// Timestamp in milliseconds since UNIX epoch.
pub type Timestamp = u64;

/// Percentage of principal forfeited on an emergency unstake.
pub const EMERGENCY_PENALTY_PERCENT: u64 = 10;

/// Lock period for the 30-day tier, in seconds.
pub const LOCK_30_DAYS_SECS: u64 = 2_592_000;

/// Lock period for the 60-day tier, in seconds.
pub const LOCK_60_DAYS_SECS: u64 = 5_184_000;

/// Lock period for the 90-day tier, in seconds.
pub const LOCK_90_DAYS_SECS: u64 = 7_776_000;

/// Accepted lock periods for a stake.
///
/// This is a closed enumeration, not a formula: a day count like 45 is
/// rejected even though it is arithmetically plausible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockPeriod {
    Days30,
    Days60,
    Days90,
}

impl LockPeriod {
    /// Resolves a day count to a lock period.
    ///
    /// # Errors
    /// `InvalidLockPeriod` for any day count other than 30, 60 or 90.
    pub fn from_days(days: u64) -> Result<Self, StakingError> {
        match days {
            30 => Ok(Self::Days30),
            60 => Ok(Self::Days60),
            90 => Ok(Self::Days90),
            _ => Err(StakingError::InvalidLockPeriod { days }),
        }
    }

    /// Lock duration in seconds.
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Days30 => LOCK_30_DAYS_SECS,
            Self::Days60 => LOCK_60_DAYS_SECS,
            Self::Days90 => LOCK_90_DAYS_SECS,
        }
    }

    /// Lock duration as a day count.
    pub const fn days(self) -> u64 {
        match self {
            Self::Days30 => 30,
            Self::Days60 => 60,
            Self::Days90 => 90,
        }
    }
}

/// Lifecycle status of a stake position.
///
/// ```text
/// [ACTIVE] ──unstake──────────→ [WITHDRAWN]  (terminal)
///     │
///     └────emergency_unstake──→ [EMERGENCY]  (terminal)
/// ```
///
/// Non-active positions are retained for history but excluded from every
/// aggregate sum and can never transition again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PositionStatus {
    /// Principal is locked in the pool.
    #[default]
    Active,
    /// Withdrawn in full after the lock matured.
    Withdrawn,
    /// Withdrawn early; a penalty was forfeited.
    Emergency,
}

/// One deposit's lock record: amount, timing, and lifecycle status.
///
/// Immutable after creation except for `status` and `penalty_paid`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakePosition {
    /// Unique, never-reused identifier (monotonic, starts at 1).
    pub position_id: u64,
    /// Address that made the deposit.
    pub depositor: Address,
    /// Principal amount in base units. Fixed at creation.
    pub amount: u64,
    /// Chosen lock period.
    pub lock_period: LockPeriod,
    /// Timestamp when the deposit was accepted (ms).
    pub staked_at_ms: Timestamp,
    /// Timestamp at which the lock matures (ms).
    pub unlock_at_ms: Timestamp,
    /// Current lifecycle status.
    pub status: PositionStatus,
    /// Penalty forfeited, non-zero only after an emergency unstake.
    pub penalty_paid: u64,
}

impl StakePosition {
    /// Creates a new active position starting at `now_ms`.
    pub fn new(
        position_id: u64,
        depositor: Address,
        amount: u64,
        lock_period: LockPeriod,
        now_ms: Timestamp,
    ) -> Self {
        Self {
            position_id,
            depositor,
            amount,
            lock_period,
            staked_at_ms: now_ms,
            unlock_at_ms: now_ms + lock_period.seconds() * 1000,
            status: PositionStatus::Active,
            penalty_paid: 0,
        }
    }

    /// Returns true if the position still holds locked principal.
    pub fn is_active(&self) -> bool {
        matches!(self.status, PositionStatus::Active)
    }

    /// Returns true if the lock has matured at `now_ms`.
    pub fn is_unlocked(&self, now_ms: Timestamp) -> bool {
        now_ms >= self.unlock_at_ms
    }

    /// Lock duration in seconds.
    pub fn lock_seconds(&self) -> u64 {
        self.lock_period.seconds()
    }
}
