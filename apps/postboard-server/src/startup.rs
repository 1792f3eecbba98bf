//! Startup sequence: open the store, ensure the schema, seed.
//!
//! Every failure here is fatal; `main` logs it and exits.

use std::sync::Arc;

use thiserror::Error;

use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;
use postboard_infra::reset_and_seed;

use crate::config::AppConfig;
use crate::state::AppState;

/// Unrecoverable error during initialization.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Create tables failed: {0}")]
    Schema(String),

    #[error("Seeding posts failed: {0}")]
    Seed(#[from] RepoError),

    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application state, failing on the first error.
pub async fn build_state(config: &AppConfig) -> Result<AppState, StartupError> {
    let posts = open_store(config).await?;

    if config.seed_on_startup {
        let seeded = reset_and_seed(posts.as_ref()).await?;
        for post in &seeded {
            tracing::debug!(id = post.id, title = %post.title, "Seed post inserted");
        }
    } else {
        tracing::info!("SEED_ON_STARTUP disabled - keeping existing posts");
    }

    tracing::info!("Application state initialized");
    Ok(AppState::new(posts))
}

#[cfg(feature = "mysql")]
async fn open_store(config: &AppConfig) -> Result<Arc<dyn PostRepository>, StartupError> {
    use postboard_infra::{DatabaseConnections, MySqlPostRepository, ensure_schema};

    let db_config = config
        .database
        .as_ref()
        .ok_or(StartupError::MissingDatabaseUrl)?;

    let connections = DatabaseConnections::init(db_config)
        .await
        .map_err(|e| StartupError::Connection(e.to_string()))?;

    ensure_schema(&connections.main)
        .await
        .map_err(|e| StartupError::Schema(e.to_string()))?;

    Ok(Arc::new(MySqlPostRepository::new(connections.main)))
}

#[cfg(not(feature = "mysql"))]
async fn open_store(config: &AppConfig) -> Result<Arc<dyn PostRepository>, StartupError> {
    if config.database.is_some() {
        tracing::warn!("DATABASE_URL ignored - built without the mysql feature");
    }
    tracing::warn!("Running with the in-memory post store. Data is lost on restart.");

    Ok(Arc::new(postboard_infra::InMemoryPostRepository::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_database() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: None,
            seed_on_startup: true,
        }
    }

    #[cfg(feature = "mysql")]
    #[actix_web::test]
    async fn test_missing_database_url_is_fatal() {
        match build_state(&config_without_database()).await {
            Err(StartupError::MissingDatabaseUrl) => {}
            Err(e) => panic!("unexpected startup error: {e}"),
            Ok(_) => panic!("startup succeeded without DATABASE_URL"),
        }
    }

    #[cfg(not(feature = "mysql"))]
    #[actix_web::test]
    async fn test_in_memory_store_is_seeded() {
        let state = build_state(&config_without_database()).await.unwrap();
        let titles: Vec<String> = state
            .posts
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Post 1", "Post 2"]);
    }
}

