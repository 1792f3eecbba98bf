//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::PostRepository;

/// Shared application state.
///
/// Holds the only shared handle in the process: the post store. Concurrent
/// use is delegated to the store (connection pool or async lock).
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
