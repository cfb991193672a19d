//! Ports layer for the staking ledger.
//!
//! - Inbound (driving) port: the `StakingApi` exposed to callers
//! - Outbound (driven) ports: clock and notification sink collaborators

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
