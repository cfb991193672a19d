//! Notification events emitted by the staking ledger.

pub mod payloads;

pub use payloads::*;
