//! Data Transfer Objects - request types for the API.
//!
//! Responses serialize the domain entities directly; only the inbound
//! shapes live here. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Request to rename a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: String,
}

/// Request to create a post, optionally filed under a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub category_id: Option<Uuid>,
}

/// Request to update a post's title and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

/// Query string for category listing: optional name fragment.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryListQuery {
    pub name: Option<String>,
}

/// Query string for post listing: optional title/content fragment.
#[derive(Debug, Clone, Deserialize)]
pub struct PostListQuery {
    pub value: Option<String>,
}
