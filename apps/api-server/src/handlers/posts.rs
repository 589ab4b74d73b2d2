//! Post handlers.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogger_shared::dto::{CreatePostRequest, PostListQuery, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /v1/posts
///
/// Returns every post newest-first, or only those whose title or content
/// contains the `value` query fragment. Unlike the category name search,
/// a fragment that matches nothing is an empty list.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let posts = match query.value.as_deref() {
        Some(value) if !value.trim().is_empty() => {
            state.posts.list_by_text_contains(value).await?
        }
        _ => state.posts.list_all().await?,
    };

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /v1/posts/{id}
pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /v1/posts/category/{categoryId}
pub async fn list_by_category(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_by_category_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /v1/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create(req.title, req.content, req.category_id)
        .await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/v1/posts/{}", post.id)))
        .json(post))
}

/// PUT /v1/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .update(path.into_inner(), req.title, req.content)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /v1/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.posts.delete_by_id(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
