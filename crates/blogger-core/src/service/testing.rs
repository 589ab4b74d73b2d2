//! In-memory repository fakes for service unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Post};
use crate::error::RepoError;
use crate::ports::{CategoryRepository, PostRepository};

#[derive(Default)]
pub(crate) struct InMemoryCategories {
    rows: Mutex<Vec<Category>>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Category>, RepoError> {
        let fragment = fragment.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&fragment))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.rows.lock().unwrap().iter().any(|c| c.id == id))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepoError> {
        let name = name.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.name.to_lowercase() == name))
    }

    async fn insert(&self, category: Category) -> Result<Category, RepoError> {
        self.rows.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: Category) -> Result<Category, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or(RepoError::NotFound)?;
        *row = category.clone();
        Ok(category)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryPosts {
    rows: Mutex<Vec<Post>>,
}

impl InMemoryPosts {
    fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        posts
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(Self::newest_first(self.rows.lock().unwrap().clone()))
    }

    async fn find_by_text_containing(&self, fragment: &str) -> Result<Vec<Post>, RepoError> {
        let fragment = fragment.to_lowercase();
        let matches = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&fragment)
                    || p.content.to_lowercase().contains(&fragment)
            })
            .cloned()
            .collect();
        Ok(Self::newest_first(matches))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_category_id(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let matches = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.category.as_ref().is_some_and(|c| c.id == category_id))
            .cloned()
            .collect();
        Ok(Self::newest_first(matches))
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.rows.lock().unwrap().iter().any(|p| p.id == id))
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.rows.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;
        *row = post.clone();
        Ok(post)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
