//! Application state - shared across all handlers.

use std::sync::Arc;

use blogger_core::ports::{CategoryRepository, PostRepository};
use blogger_core::service::{CategoryService, PostService};
use blogger_infra::{
    DatabaseConfig, InMemoryCategoryRepository, InMemoryPostRepository, InMemoryStore,
};

#[cfg(feature = "postgres")]
use blogger_infra::{DatabaseConnections, PostgresCategoryRepository, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub posts: PostService,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (category_repo, post_repo): (Arc<dyn CategoryRepository>, Arc<dyn PostRepository>) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => (
                        Arc::new(PostgresCategoryRepository::new(connections.main.clone())),
                        Arc::new(PostgresPostRepository::new(connections.main)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Self::in_memory_repos()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory_repos()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (category_repo, post_repo): (Arc<dyn CategoryRepository>, Arc<dyn PostRepository>) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory_repos()
        };

        tracing::info!("Application state initialized");

        Self {
            categories: CategoryService::new(category_repo.clone()),
            posts: PostService::new(post_repo, category_repo),
        }
    }

    fn in_memory_repos() -> (Arc<dyn CategoryRepository>, Arc<dyn PostRepository>) {
        let store = InMemoryStore::new();
        (
            Arc::new(InMemoryCategoryRepository::new(store.clone())),
            Arc::new(InMemoryPostRepository::new(store)),
        )
    }
}
