//! In-memory post repository - used when the server is built without MySQL.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, Post};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};

struct Table {
    rows: Vec<Post>,
    next_id: i64,
}

/// In-memory post store with auto-increment ids.
///
/// Rows are kept in insertion order, which is also ascending id order.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, NewPost, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, entity: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let post = entity.into_post(table.next_id);
        table.next_id += 1;
        table.rows.push(post.clone());

        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.clone())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn truncate(&self) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.clear();
        table.next_id = 1;
        Ok(())
    }
}
