//! In-memory repository implementations - used as fallback when no
//! database is configured.
//!
//! Both repositories share one [`InMemoryStore`] so that deleting a
//! category detaches its posts, matching the relational schema's
//! `ON DELETE SET NULL` behavior. Note: Data is lost on process restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogger_core::domain::{Category, Post};
use blogger_core::error::RepoError;
use blogger_core::ports::{CategoryRepository, PostRepository};

/// Shared backing store for the in-memory repositories.
#[derive(Default)]
pub struct InMemoryStore {
    categories: RwLock<HashMap<Uuid, Category>>,
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    posts
}

/// In-memory category repository over a shared [`InMemoryStore`].
pub struct InMemoryCategoryRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCategoryRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        let categories = self.store.categories.read().await;
        Ok(categories.values().cloned().collect())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Category>, RepoError> {
        let fragment = fragment.to_lowercase();
        let categories = self.store.categories.read().await;
        Ok(categories
            .values()
            .filter(|c| c.name.to_lowercase().contains(&fragment))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        let categories = self.store.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let categories = self.store.categories.read().await;
        Ok(categories.contains_key(&id))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepoError> {
        let name = name.to_lowercase();
        let categories = self.store.categories.read().await;
        Ok(categories.values().any(|c| c.name.to_lowercase() == name))
    }

    async fn insert(&self, category: Category) -> Result<Category, RepoError> {
        let mut categories = self.store.categories.write().await;

        // The write lock stands in for the unique index on the lowercased
        // name that the relational schema carries.
        let name = category.name.to_lowercase();
        if categories.values().any(|c| c.name.to_lowercase() == name) {
            return Err(RepoError::Constraint(format!(
                "duplicate category name: {}",
                category.name
            )));
        }

        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, RepoError> {
        let mut categories = self.store.categories.write().await;
        if !categories.contains_key(&category.id) {
            return Err(RepoError::NotFound);
        }

        let name = category.name.to_lowercase();
        if categories
            .values()
            .any(|c| c.id != category.id && c.name.to_lowercase() == name)
        {
            return Err(RepoError::Constraint(format!(
                "duplicate category name: {}",
                category.name
            )));
        }

        categories.insert(category.id, category.clone());
        drop(categories);

        // Posts embed the category, so a rename must be reflected there too.
        let mut posts = self.store.posts.write().await;
        for post in posts.values_mut() {
            if let Some(c) = post.category.as_mut() {
                if c.id == category.id {
                    *c = category.clone();
                }
            }
        }

        Ok(category)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut categories = self.store.categories.write().await;
        if categories.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        drop(categories);

        // ON DELETE SET NULL: detach the category from its posts.
        let mut posts = self.store.posts.write().await;
        for post in posts.values_mut() {
            if post.category.as_ref().is_some_and(|c| c.id == id) {
                post.category = None;
            }
        }

        Ok(())
    }
}

/// In-memory post repository over a shared [`InMemoryStore`].
pub struct InMemoryPostRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryPostRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.store.posts.read().await;
        Ok(newest_first(posts.values().cloned().collect()))
    }

    async fn find_by_text_containing(&self, fragment: &str) -> Result<Vec<Post>, RepoError> {
        let fragment = fragment.to_lowercase();
        let posts = self.store.posts.read().await;
        Ok(newest_first(
            posts
                .values()
                .filter(|p| {
                    p.title.to_lowercase().contains(&fragment)
                        || p.content.to_lowercase().contains(&fragment)
                })
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.store.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn find_by_category_id(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let posts = self.store.posts.read().await;
        Ok(newest_first(
            posts
                .values()
                .filter(|p| p.category.as_ref().is_some_and(|c| c.id == category_id))
                .cloned()
                .collect(),
        ))
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let posts = self.store.posts.read().await;
        Ok(posts.contains_key(&id))
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.store.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.store.posts.write().await;
        if !posts.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.store.posts.write().await;
        if posts.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
