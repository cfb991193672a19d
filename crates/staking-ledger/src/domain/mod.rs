//! # Domain Layer - Staking Ledger
//!
//! Pure business logic, no I/O and no clock: time enters every operation
//! as an argument.
//!
//! ## Components
//!
//! - `entities`: position lifecycle state machine, lock periods
//! - `balance`: conserved-quantity asset value (move-only)
//! - `capability`: owner/admin authorization registry
//! - `pool`: the StakingPool aggregate root
//! - `value_objects`: receipts, PoolStats, RejectedDeposit
//! - `errors`: StakingError enumeration

pub mod balance;
pub mod capability;
pub mod entities;
pub mod errors;
pub mod pool;
pub mod value_objects;

pub use balance::*;
pub use capability::*;
pub use entities::*;
pub use errors::*;
pub use pool::*;
pub use value_objects::*;
