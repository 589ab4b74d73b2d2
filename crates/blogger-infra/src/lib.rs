//! # Blogger Infrastructure
//!
//! Concrete implementations of the storage ports defined in `blogger-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - no external dependencies, in-memory storage only

pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryCategoryRepository, InMemoryPostRepository, InMemoryStore};

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresCategoryRepository, PostgresPostRepository};
