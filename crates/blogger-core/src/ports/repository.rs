use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Post};
use crate::error::RepoError;

/// Category storage.
///
/// One method per query the service layer needs; no generic find/save
/// surface. Name comparisons (`exists_by_name`, `find_by_name_containing`)
/// are case-insensitive.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, in no defined order.
    async fn find_all(&self) -> Result<Vec<Category>, RepoError>;

    /// Categories whose name contains the fragment, ignoring case.
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Category>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError>;

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError>;

    /// Whether any category already uses this name, ignoring case.
    async fn exists_by_name(&self, name: &str) -> Result<bool, RepoError>;

    async fn insert(&self, category: Category) -> Result<Category, RepoError>;

    async fn update(&self, category: Category) -> Result<Category, RepoError>;

    /// Delete by id. Fails with [`RepoError::NotFound`] if nothing was deleted.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Post storage.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts whose title or content contains the fragment, ignoring case.
    /// Newest first.
    async fn find_by_text_containing(&self, fragment: &str) -> Result<Vec<Post>, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Posts filed under the given category, newest first.
    async fn find_by_category_id(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError>;

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError>;

    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete by id. Fails with [`RepoError::NotFound`] if nothing was deleted.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;
}
