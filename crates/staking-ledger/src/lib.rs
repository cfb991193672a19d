//! # Staking Ledger
//!
//! A custody ledger for a single fungible asset: deposits are locked for a
//! chosen duration and released later either in full (matured withdrawal)
//! or early at a fixed 10% penalty (emergency withdrawal). Administrative
//! operations are gated by a capability registry, never by possession of a
//! credential value.
//!
//! ## Conservation
//!
//! No asset is created or destroyed by any path through the ledger:
//!
//! - custody always equals active principal plus retained penalties
//! - the running stake total always equals the sum over ACTIVE positions
//! - an emergency exit returns exactly `amount - floor(amount * 10 / 100)`
//! - position ids strictly increase and are never reused
//!
//! The asset value type (`Balance`) is move-only, so the compiler rejects
//! call paths that would duplicate or silently drop units, and a rejected
//! deposit travels back to the caller inside the error.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/  - system clock, manual clock, in-memory audit log
//! ports/     - StakingApi (inbound), TimeSource + NotificationSink (outbound)
//! service/   - StakingService: clock reads, logging, event emission
//! domain/    - pool aggregate, positions, balances, capabilities, errors
//! events/    - notification payloads (append-only audit trail)
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use staking_ledger::adapters::{InMemoryAuditLog, ManualTimeSource};
//! use staking_ledger::domain::Balance;
//! use staking_ledger::ports::StakingApi;
//! use staking_ledger::service::StakingService;
//!
//! let owner = [0x01; 20];
//! let alice = [0xAA; 20];
//! let clock = Arc::new(ManualTimeSource::new(0));
//! let log = Arc::new(InMemoryAuditLog::new());
//! let (mut ledger, _owner_cap) = StakingService::new(owner, clock.clone(), log);
//!
//! let receipt = ledger.stake(alice, Balance::issue(1_000), 30).unwrap();
//! clock.set(receipt.unlock_at_ms);
//! let (payout, _) = ledger.unstake(alice, receipt.position_id).unwrap();
//! assert_eq!(payout.value(), 1_000);
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

pub use domain::{
    Address, AdminCap, Balance, EmergencyReceipt, LockPeriod, OwnerCap, PoolStats, PositionStatus,
    RejectedDeposit, StakePosition, StakeReceipt, StakingError, StakingPool, Timestamp,
    WithdrawalReceipt,
};
pub use events::Notification;
pub use ports::{NotificationSink, StakingApi, TimeSource};
pub use service::StakingService;
