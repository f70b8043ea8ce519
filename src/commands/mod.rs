//! Command implementations.
//!
//! CHANGELOG:
//! - 10/14/2026 - threads, send, trust, trusted

pub mod messaging;
pub mod threads;
pub mod trust;
