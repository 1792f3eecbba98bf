//! Request plumbing: error rendering and validating extractors.

pub mod error;
pub mod validation;
