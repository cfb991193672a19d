//! Staking ledger error types.
//!
//! Every failure is a synchronous, non-retryable rejection of the call in
//! progress. Nothing here is recoverable internally; a failed precondition
//! aborts the whole call with no partial mutation.

use thiserror::Error;

use super::entities::Timestamp;

/// Error type for every ledger operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StakingError {
    // -- authorization --
    /// Caller does not match the registered owner.
    #[error("caller is not the pool owner")]
    NotOwner,

    /// Caller is not in the current admin set.
    #[error("caller is not a delegated admin")]
    NotAdmin,

    // -- capacity / uniqueness --
    /// Both admin seats are taken.
    #[error("admin ceiling reached: both admin seats are taken")]
    AdminCeilingReached,

    /// Address already holds an admin seat.
    #[error("address is already a delegated admin")]
    AdminAlreadyPresent,

    /// Address holds no admin seat.
    #[error("address is not a delegated admin")]
    AdminNotFound,

    // -- availability --
    /// The circuit breaker is engaged; balance-mutating operations rejected.
    #[error("contract is paused")]
    ContractPaused,

    /// Pause requested while already paused.
    #[error("contract is already paused")]
    AlreadyPaused,

    /// Unpause requested while already active.
    #[error("contract is already active")]
    AlreadyUnpaused,

    // -- validation --
    /// Day count outside the closed set {30, 60, 90}.
    #[error("invalid lock period: {days} days (accepted: 30, 60, 90)")]
    InvalidLockPeriod { days: u64 },

    /// Zero-amount deposit.
    #[error("stake amount must be greater than zero")]
    InsufficientAmount,

    // -- lookup --
    /// No position with this id among the caller's positions.
    #[error("no stake position with id {position_id} for this depositor")]
    InvalidStakeId { position_id: u64 },

    // -- state conflict --
    /// Position already left the ACTIVE state (terminal).
    #[error("stake position {position_id} was already withdrawn")]
    AlreadyWithdrawn { position_id: u64 },

    /// Lock has not matured yet.
    #[error("stake position {position_id} is still locked until {unlock_at_ms} ms")]
    StillLocked {
        position_id: u64,
        unlock_at_ms: Timestamp,
    },

    // -- integrity --
    /// A split was requested beyond the held quantity. Unreachable while
    /// custody conservation holds; surfacing it means the ledger is corrupt.
    #[error("custody shortfall: requested {requested}, available {available}")]
    CustodyShortfall { requested: u64, available: u64 },

    /// A conservation audit found the books out of balance.
    #[error("conservation violated: {0}")]
    ConservationViolated(String),
}
