//! Infrastructure Layer
//!
//! Repository implementations: PostgreSQL for the running service and
//! an in-memory store for tests.

pub mod memory;
pub mod postgres;
