use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Post entity - represents a blog post or article.
///
/// The category, when present, is embedded whole so serialized posts carry
/// the full category object rather than a bare foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Stamped once at creation (UTC) and never updated afterwards.
    pub created_date: DateTime<Utc>,
    pub category: Option<Category>,
}

impl Post {
    /// Create a new post with a freshly generated id and creation timestamp.
    pub fn new(title: String, content: String, category: Option<Category>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_date: Utc::now(),
            category,
        }
    }
}
