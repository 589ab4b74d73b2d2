//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use blogger_core::domain::{Category, Post};
use blogger_core::error::RepoError;
use blogger_core::ports::{CategoryRepository, PostRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL category repository.
pub struct PostgresCategoryRepository {
    db: DbConn,
}

impl PostgresCategoryRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        let rows = CategoryEntity::find()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Category>, RepoError> {
        let pattern = contains_pattern(fragment);
        let rows = CategoryEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(category::Column::Name))).like(pattern))
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        let row = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(row.map(Into::into))
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let count = CategoryEntity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(query_err)?;

        Ok(count > 0)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RepoError> {
        let count = CategoryEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(category::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .count(&self.db)
            .await
            .map_err(query_err)?;

        Ok(count > 0)
    }

    async fn insert(&self, entry: Category) -> Result<Category, RepoError> {
        let active: category::ActiveModel = entry.into();
        let model = active.insert(&self.db).await.map_err(save_err)?;

        Ok(model.into())
    }

    async fn update(&self, entry: Category) -> Result<Category, RepoError> {
        let active: category::ActiveModel = entry.into();
        let model = active.update(&self.db).await.map_err(save_err)?;

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let result = CategoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// PostgreSQL post repository.
///
/// Read queries join the category so domain posts come back with the
/// referenced category embedded.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(CategoryEntity)
            .order_by_desc(post::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows
            .into_iter()
            .map(|(p, c)| post::into_domain(p, c))
            .collect())
    }

    async fn find_by_text_containing(&self, fragment: &str) -> Result<Vec<Post>, RepoError> {
        let pattern = contains_pattern(fragment);
        let rows = PostEntity::find()
            .find_also_related(CategoryEntity)
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((PostEntity, post::Column::Title))))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((PostEntity, post::Column::Content))))
                            .like(pattern),
                    ),
            )
            .order_by_desc(post::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows
            .into_iter()
            .map(|(p, c)| post::into_domain(p, c))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(CategoryEntity)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(row.map(|(p, c)| post::into_domain(p, c)))
    }

    async fn find_by_category_id(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(CategoryEntity)
            .filter(post::Column::CategoryId.eq(category_id))
            .order_by_desc(post::Column::CreatedDate)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows
            .into_iter()
            .map(|(p, c)| post::into_domain(p, c))
            .collect())
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let count = PostEntity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(query_err)?;

        Ok(count > 0)
    }

    async fn insert(&self, entry: Post) -> Result<Post, RepoError> {
        let category = entry.category.clone();
        let active: post::ActiveModel = entry.into();
        let model = active.insert(&self.db).await.map_err(save_err)?;

        Ok(Post {
            id: model.id,
            title: model.title,
            content: model.content,
            created_date: model.created_date.into(),
            category,
        })
    }

    async fn update(&self, entry: Post) -> Result<Post, RepoError> {
        let category = entry.category.clone();
        let active: post::ActiveModel = entry.into();
        let model = active.update(&self.db).await.map_err(save_err)?;

        Ok(Post {
            id: model.id,
            title: model.title,
            content: model.content,
            created_date: model.created_date.into(),
            category,
        })
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// `%fragment%`, lowercased, with LIKE wildcards in the fragment escaped.
fn contains_pattern(fragment: &str) -> String {
    let escaped = fragment
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn query_err(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

fn save_err(err: DbErr) -> RepoError {
    let msg = err.to_string();
    if msg.contains("duplicate") || msg.contains("unique") {
        RepoError::Constraint(msg)
    } else {
        RepoError::Query(msg)
    }
}
