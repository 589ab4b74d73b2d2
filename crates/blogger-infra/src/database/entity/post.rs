//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_date: DateTimeWithTimeZone,
    pub category_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Build a domain Post from a row and its optionally joined category.
pub fn into_domain(
    model: Model,
    category: Option<super::category::Model>,
) -> blogger_core::domain::Post {
    blogger_core::domain::Post {
        id: model.id,
        title: model.title,
        content: model.content,
        created_date: model.created_date.into(),
        category: category.map(Into::into),
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<blogger_core::domain::Post> for ActiveModel {
    fn from(post: blogger_core::domain::Post) -> Self {
        let category_id = post.category.as_ref().map(|c| c.id);
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            created_date: Set(post.created_date.into()),
            category_id: Set(category_id),
        }
    }
}
