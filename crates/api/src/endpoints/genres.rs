//! Genre endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use catalog_common::AppResult;
use catalog_core::GenreInput;
use catalog_db::entities::genre;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    endpoints::PageQuery,
    middleware::AppState,
    response::{ApiResponse, Created, Paginated, no_content},
};

/// Genre response.
#[derive(Serialize)]
pub struct GenreResponse {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<genre::Model> for GenreResponse {
    fn from(g: genre::Model) -> Self {
        Self {
            id: g.id,
            name: g.name,
            is_active: g.is_active,
            created_at: g.created_at.to_rfc3339(),
            updated_at: g.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Create or replace genre request.
#[derive(Debug, Deserialize, Validate)]
pub struct GenreRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub is_active: Option<bool>,
}

impl From<GenreRequest> for GenreInput {
    fn from(req: GenreRequest) -> Self {
        Self {
            name: req.name,
            is_active: req.is_active,
        }
    }
}

async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Paginated<GenreResponse>> {
    let total = state.genre_service.count().await?;
    let items = state.genre_service.list(page.limit, page.offset).await?;

    Ok(Paginated {
        data: items.into_iter().map(Into::into).collect(),
        total,
        limit: page.limit,
        offset: page.offset,
    })
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<GenreRequest>,
) -> AppResult<Created<GenreResponse>> {
    req.validate()?;
    let genre = state.genre_service.create(req.into()).await?;
    Ok(Created(genre.into()))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<GenreResponse>> {
    let genre = state.genre_service.get(&id).await?;
    Ok(ApiResponse::ok(genre.into()))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<GenreRequest>,
) -> AppResult<ApiResponse<GenreResponse>> {
    req.validate()?;
    let genre = state.genre_service.update(&id, req.into()).await?;
    Ok(ApiResponse::ok(genre.into()))
}

async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.genre_service.delete(&id).await?;
    Ok(no_content())
}

/// Create the genres router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(destroy))
}
