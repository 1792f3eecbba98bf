//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `mysql` (default) - MySQL record store via SeaORM
//!
//! Without `mysql` only the in-memory store is available.

pub mod database;

// Re-exports
pub use database::{DatabaseConfig, InMemoryPostRepository, reset_and_seed};

#[cfg(feature = "mysql")]
pub use database::{DatabaseConnections, MySqlPostRepository, ensure_schema};
