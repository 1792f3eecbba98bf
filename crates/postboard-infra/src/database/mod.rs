//! Post record store: connection management, schema, repositories, seeding.

mod connections;
mod memory;
mod seed;

#[cfg(feature = "mysql")]
pub mod entity;
#[cfg(feature = "mysql")]
pub mod mysql_repo;
#[cfg(feature = "mysql")]
mod schema;
#[cfg(feature = "mysql")]
mod sea_orm_base;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;
pub use seed::{SEED_POSTS, reset_and_seed};

#[cfg(feature = "mysql")]
pub use connections::DatabaseConnections;
#[cfg(feature = "mysql")]
pub use mysql_repo::MySqlPostRepository;
#[cfg(feature = "mysql")]
pub use schema::ensure_schema;
#[cfg(feature = "mysql")]
pub use sea_orm_base::SeaOrmBaseRepository;

#[cfg(feature = "mysql")]
#[cfg(test)]
mod tests;
