//! Adapters implementing the outbound ports.

pub mod clock;
pub mod memory_log;

pub use clock::*;
pub use memory_log::*;
