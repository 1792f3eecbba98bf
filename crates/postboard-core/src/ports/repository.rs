use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Generic repository trait for insert-only record stores.
///
/// `T` is the persisted entity, `N` the not-yet-inserted form and `ID` the
/// store-assigned key.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity, returning it with its assigned ID.
    async fn insert(&self, entity: N) -> Result<T, RepoError>;

    /// All entities ordered by ascending ID.
    async fn list_all(&self) -> Result<Vec<T>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i64> {
    /// Delete every post and reset ID assignment.
    async fn truncate(&self) -> Result<(), RepoError>;
}
