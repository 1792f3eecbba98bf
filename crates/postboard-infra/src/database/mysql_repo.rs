//! MySQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, EntityTrait};

use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::entity::post::Entity as PostEntity;
use super::sea_orm_base::SeaOrmBaseRepository;

/// MySQL post repository.
pub type MySqlPostRepository = SeaOrmBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn truncate(&self) -> Result<(), RepoError> {
        match self.db.get_database_backend() {
            // TRUNCATE also resets AUTO_INCREMENT, so seeded ids restart at 1.
            DatabaseBackend::MySql => {
                self.db
                    .execute_unprepared("TRUNCATE TABLE posts")
                    .await
                    .map_err(|e| RepoError::Query(e.to_string()))?;
            }
            _ => {
                PostEntity::delete_many()
                    .exec(&self.db)
                    .await
                    .map_err(|e| RepoError::Query(e.to_string()))?;
            }
        }

        tracing::debug!("Truncated posts table");
        Ok(())
    }
}
