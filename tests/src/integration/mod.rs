//! Integration tests for the staking ledger.

pub mod conservation;
pub mod flows;
