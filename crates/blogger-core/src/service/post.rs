use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::{CategoryRepository, PostRepository};

/// Post operations.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { posts, categories }
    }

    /// All posts, newest first.
    pub async fn list_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    /// Posts whose title or content contains the fragment.
    ///
    /// Unlike the category name search, an empty match is a normal empty
    /// list.
    pub async fn list_by_text_contains(&self, value: &str) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_text_containing(value).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))
    }

    /// Posts filed under the given category, newest first.
    pub async fn list_by_category_id(&self, category_id: Uuid) -> Result<Vec<Post>, DomainError> {
        if !self.categories.exists_by_id(category_id).await? {
            return Err(DomainError::CategoryNotFound(category_id));
        }
        Ok(self.posts.find_by_category_id(category_id).await?)
    }

    /// Create a post, optionally filed under an existing category.
    ///
    /// The category is resolved before anything is persisted, so an
    /// unresolved id leaves the store untouched.
    pub async fn create(
        &self,
        title: String,
        content: String,
        category_id: Option<Uuid>,
    ) -> Result<Post, DomainError> {
        validate_text(&title, &content)?;

        let category = match category_id {
            Some(id) => Some(
                self.categories
                    .find_by_id(id)
                    .await?
                    .ok_or(DomainError::CategoryNotFound(id))?,
            ),
            None => None,
        };

        let post = Post::new(title, content, category);
        Ok(self.posts.insert(post).await?)
    }

    /// Overwrite title and content. Category and creation date are left
    /// untouched.
    pub async fn update(
        &self,
        id: Uuid,
        title: String,
        content: String,
    ) -> Result<Post, DomainError> {
        validate_text(&title, &content)?;

        let mut post = self.get_by_id(id).await?;
        post.title = title;
        post.content = content;
        Ok(self.posts.update(post).await?)
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        if !self.posts.exists_by_id(id).await? {
            return Err(DomainError::PostNotFound(id));
        }

        self.posts.delete_by_id(id).await?;
        Ok(true)
    }
}

fn validate_text(title: &str, content: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation(
            "Post title cannot be empty".to_string(),
        ));
    }
    if content.trim().is_empty() {
        return Err(DomainError::Validation(
            "Post content cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::CategoryService;
    use crate::service::testing::{InMemoryCategories, InMemoryPosts};

    fn services() -> (PostService, CategoryService) {
        let categories = Arc::new(InMemoryCategories::default());
        let posts = Arc::new(InMemoryPosts::default());
        (
            PostService::new(posts, categories.clone()),
            CategoryService::new(categories),
        )
    }

    #[tokio::test]
    async fn test_create_with_blank_title_is_invalid() {
        let (posts, _) = services();

        let err = posts
            .create("   ".to_string(), "content".to_string(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_with_blank_content_is_invalid() {
        let (posts, _) = services();

        let err = posts
            .create("title".to_string(), "".to_string(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_blank_title_rejected_even_with_valid_category() {
        let (posts, categories) = services();
        let category = categories.create("Tech".to_string()).await.unwrap();

        let err = posts
            .create("".to_string(), "content".to_string(), Some(category.id))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_is_not_found_and_persists_nothing() {
        let (posts, _) = services();

        let err = posts
            .create(
                "title".to_string(),
                "content".to_string(),
                Some(Uuid::new_v4()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::CategoryNotFound(_)));
        assert!(posts.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_without_category() {
        let (posts, _) = services();

        let created = posts
            .create("title".to_string(), "content".to_string(), None)
            .await
            .unwrap();

        assert!(created.category.is_none());
        let fetched = posts.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.title, "title");
    }

    #[tokio::test]
    async fn test_list_all_is_newest_first() {
        let (posts, _) = services();

        let a = posts
            .create("A".to_string(), "first".to_string(), None)
            .await
            .unwrap();
        let b = posts
            .create("B".to_string(), "second".to_string(), None)
            .await
            .unwrap();

        let all = posts.list_all().await.unwrap();
        let ids: Vec<Uuid> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn test_text_search_with_no_match_is_an_empty_list() {
        let (posts, _) = services();
        posts
            .create("title".to_string(), "content".to_string(), None)
            .await
            .unwrap();

        let found = posts.list_by_text_contains("xyz").await.unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_text_search_matches_title_or_content() {
        let (posts, _) = services();
        let by_title = posts
            .create("Rust news".to_string(), "content".to_string(), None)
            .await
            .unwrap();
        let by_content = posts
            .create("other".to_string(), "all about rust".to_string(), None)
            .await
            .unwrap();
        posts
            .create("unrelated".to_string(), "nothing here".to_string(), None)
            .await
            .unwrap();

        let found = posts.list_by_text_contains("rust").await.unwrap();
        let ids: Vec<Uuid> = found.iter().map(|p| p.id).collect();

        assert_eq!(found.len(), 2);
        assert!(ids.contains(&by_title.id));
        assert!(ids.contains(&by_content.id));
    }

    #[tokio::test]
    async fn test_list_by_category_id_round_trip() {
        let (posts, categories) = services();
        let category = categories.create("Tech".to_string()).await.unwrap();
        let post = posts
            .create(
                "title".to_string(),
                "content".to_string(),
                Some(category.id),
            )
            .await
            .unwrap();

        let found = posts.list_by_category_id(category.id).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, post.id);
    }

    #[tokio::test]
    async fn test_list_by_unknown_category_is_not_found() {
        let (posts, _) = services();

        let err = posts.list_by_category_id(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, DomainError::CategoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_overwrites_title_and_content_only() {
        let (posts, categories) = services();
        let category = categories.create("Tech".to_string()).await.unwrap();
        let created = posts
            .create("old".to_string(), "old body".to_string(), Some(category.id))
            .await
            .unwrap();

        let updated = posts
            .update(created.id, "new".to_string(), "new body".to_string())
            .await
            .unwrap();

        assert_eq!(updated.title, "new");
        assert_eq!(updated.content, "new body");
        assert_eq!(updated.created_date, created.created_date);
        assert_eq!(updated.category, created.category);
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let (posts, _) = services();

        let err = posts
            .update(Uuid::new_v4(), "title".to_string(), "content".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::PostNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (posts, _) = services();
        let created = posts
            .create("title".to_string(), "content".to_string(), None)
            .await
            .unwrap();

        assert!(posts.delete_by_id(created.id).await.unwrap());

        let err = posts.get_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound(_)));

        let err = posts.delete_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound(_)));
    }
}
