use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Category;
use crate::error::{DomainError, RepoError};
use crate::ports::CategoryRepository;

/// Category operations.
///
/// The duplicate-name test is check-then-act and therefore not atomic
/// under concurrent creates; the storage schema backs it with a unique
/// index over the lowercased name, which surfaces here as a constraint
/// violation and is reported as the same duplicate-name error.
#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// All categories, in no defined order.
    pub async fn list_all(&self) -> Result<Vec<Category>, DomainError> {
        Ok(self.categories.find_all().await?)
    }

    /// Categories whose name contains the fragment, ignoring case.
    ///
    /// An empty match is an error, not an empty list.
    pub async fn list_by_name_contains(
        &self,
        fragment: &str,
    ) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.find_by_name_containing(fragment).await?;
        if categories.is_empty() {
            return Err(DomainError::CategoryNameNotFound(fragment.to_string()));
        }
        Ok(categories)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CategoryNotFound(id))
    }

    pub async fn create(&self, name: String) -> Result<Category, DomainError> {
        if self.exists_by_name(&name).await? {
            return Err(DomainError::DuplicateCategoryName(name));
        }

        let category = Category::new(name);
        let name = category.name.clone();
        self.categories
            .insert(category)
            .await
            .map_err(|err| map_duplicate(err, name))
    }

    pub async fn update(&self, id: Uuid, name: String) -> Result<Category, DomainError> {
        let mut category = self.get_by_id(id).await?;

        // A category may keep its own name (in any casing) without
        // conflicting with itself.
        if category.name.to_lowercase() != name.to_lowercase()
            && self.exists_by_name(&name).await?
        {
            return Err(DomainError::DuplicateCategoryName(name));
        }

        category.name = name;
        let name = category.name.clone();
        self.categories
            .update(category)
            .await
            .map_err(|err| map_duplicate(err, name))
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        if !self.categories.exists_by_id(id).await? {
            return Err(DomainError::CategoryNotFound(id));
        }

        self.categories.delete_by_id(id).await?;
        Ok(true)
    }

    /// Whether any category already uses this name, ignoring case.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.categories.exists_by_name(name).await?)
    }
}

fn map_duplicate(err: RepoError, name: String) -> DomainError {
    match err {
        RepoError::Constraint(_) => DomainError::DuplicateCategoryName(name),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::InMemoryCategories;

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(InMemoryCategories::default()))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = service();

        let created = service.create("Tech".to_string()).await.unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_differing_only_in_case_conflicts() {
        let service = service();
        service.create("Tech".to_string()).await.unwrap();

        let err = service.create("tech".to_string()).await.unwrap_err();

        assert!(matches!(err, DomainError::DuplicateCategoryName(_)));
    }

    #[tokio::test]
    async fn test_update_to_own_name_never_conflicts() {
        let service = service();
        let created = service.create("Tech".to_string()).await.unwrap();

        // Same casing.
        let updated = service
            .update(created.id, "Tech".to_string())
            .await
            .unwrap();
        assert_eq!(updated.name, "Tech");

        // Different casing of its own name.
        let updated = service
            .update(created.id, "TECH".to_string())
            .await
            .unwrap();
        assert_eq!(updated.name, "TECH");
    }

    #[tokio::test]
    async fn test_update_to_another_categorys_name_conflicts() {
        let service = service();
        service.create("Tech".to_string()).await.unwrap();
        let travel = service.create("Travel".to_string()).await.unwrap();

        let err = service
            .update(travel.id, "TECH".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::DuplicateCategoryName(_)));
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let service = service();

        let err = service
            .update(Uuid::new_v4(), "Tech".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::CategoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_category_is_not_found() {
        let service = service();

        let err = service.delete_by_id(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, DomainError::CategoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service();
        let created = service.create("Tech".to_string()).await.unwrap();

        assert!(service.delete_by_id(created.id).await.unwrap());

        let err = service.get_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::CategoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_name_search_with_no_match_is_not_found() {
        let service = service();
        service.create("Tech".to_string()).await.unwrap();
        service.create("Travel".to_string()).await.unwrap();

        let err = service.list_by_name_contains("xyz").await.unwrap_err();

        assert!(matches!(err, DomainError::CategoryNameNotFound(_)));
    }

    #[tokio::test]
    async fn test_name_search_ignores_case() {
        let service = service();
        service.create("Tech".to_string()).await.unwrap();
        service.create("Travel".to_string()).await.unwrap();

        let matches = service.list_by_name_contains("tra").await.unwrap();

        assert!(matches.iter().any(|c| c.name == "Travel"));
    }
}
