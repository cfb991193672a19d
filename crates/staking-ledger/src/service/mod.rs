//! Service layer orchestrating the domain with the outbound ports.

pub mod staking_service;

pub use staking_service::*;
