//! # Postboard Core
//!
//! The domain layer of Postboard.
//! This crate contains the post entity and the repository ports, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
