//! Category handlers.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogger_shared::dto::{CategoryListQuery, CreateCategoryRequest, UpdateCategoryRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /v1/categories
///
/// Returns every category, or only those whose name contains the `name`
/// query fragment. A fragment that matches nothing is a 404, not an empty
/// list.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<CategoryListQuery>,
) -> AppResult<HttpResponse> {
    let categories = match query.name.as_deref() {
        Some(name) if !name.trim().is_empty() => {
            state.categories.list_by_name_contains(name).await?
        }
        _ => state.categories.list_all().await?,
    };

    Ok(HttpResponse::Ok().json(categories))
}

/// GET /v1/categories/{id}
pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let category = state.categories.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(category))
}

/// POST /v1/categories
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let category = state.categories.create(req.name).await?;

    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("/v1/categories/{}", category.id),
        ))
        .json(category))
}

/// PUT /v1/categories/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let category = state.categories.update(path.into_inner(), req.name).await?;

    Ok(HttpResponse::Ok().json(category))
}

/// DELETE /v1/categories/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.categories.delete_by_id(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
