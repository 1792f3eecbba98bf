//! # Postboard Shared
//!
//! Request types and view formatting shared by the server and its templates.

pub mod dto;
pub mod format;

pub use dto::CreatePostForm;
