//! Table creation derived from the entity definitions.

use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::post;

/// Create the `posts` table if it does not exist yet.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(post::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    tracing::info!("Schema ready (table: posts)");

    Ok(())
}
