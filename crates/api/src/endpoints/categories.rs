//! Category endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use catalog_common::AppResult;
use catalog_core::CategoryInput;
use catalog_db::entities::category;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    endpoints::PageQuery,
    middleware::AppState,
    response::{ApiResponse, Created, Paginated, no_content},
};

/// Category response.
#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<category::Model> for CategoryResponse {
    fn from(c: category::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            is_active: c.is_active,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Create or replace category request.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl From<CategoryRequest> for CategoryInput {
    fn from(req: CategoryRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            is_active: req.is_active,
        }
    }
}

async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Paginated<CategoryResponse>> {
    let total = state.category_service.count().await?;
    let items = state.category_service.list(page.limit, page.offset).await?;

    Ok(Paginated {
        data: items.into_iter().map(Into::into).collect(),
        total,
        limit: page.limit,
        offset: page.offset,
    })
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CategoryRequest>,
) -> AppResult<Created<CategoryResponse>> {
    req.validate()?;
    let category = state.category_service.create(req.into()).await?;
    Ok(Created(category.into()))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    let category = state.category_service.get(&id).await?;
    Ok(ApiResponse::ok(category.into()))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CategoryRequest>,
) -> AppResult<ApiResponse<CategoryResponse>> {
    req.validate()?;
    let category = state.category_service.update(&id, req.into()).await?;
    Ok(ApiResponse::ok(category.into()))
}

async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.category_service.delete(&id).await?;
    Ok(no_content())
}

/// Create the categories router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(destroy))
}
