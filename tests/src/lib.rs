//! # Staking Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs         # End-to-end flows through the service layer
//!     └── conservation.rs  # Property tests over random call sequences
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ledger-tests
//!
//! # By category
//! cargo test -p ledger-tests integration::flows
//! cargo test -p ledger-tests integration::conservation
//! ```

#![allow(dead_code)]

pub mod integration;
