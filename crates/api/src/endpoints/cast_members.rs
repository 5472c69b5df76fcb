//! Cast member endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use catalog_common::AppResult;
use catalog_core::CastMemberInput;
use catalog_db::entities::cast_member;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    endpoints::PageQuery,
    middleware::AppState,
    response::{ApiResponse, Created, Paginated, no_content},
};

/// Cast member response.
#[derive(Serialize)]
pub struct CastMemberResponse {
    pub id: String,
    pub name: String,
    /// 1 - director, 2 - actor.
    pub kind: i16,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<cast_member::Model> for CastMemberResponse {
    fn from(m: cast_member::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            kind: m.kind,
            created_at: m.created_at.to_rfc3339(),
            updated_at: m.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Create or replace cast member request.
#[derive(Debug, Deserialize, Validate)]
pub struct CastMemberRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub kind: Option<i16>,
}

impl From<CastMemberRequest> for CastMemberInput {
    fn from(req: CastMemberRequest) -> Self {
        Self {
            name: req.name,
            kind: req.kind,
        }
    }
}

async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Paginated<CastMemberResponse>> {
    let total = state.cast_member_service.count().await?;
    let items = state
        .cast_member_service
        .list(page.limit, page.offset)
        .await?;

    Ok(Paginated {
        data: items.into_iter().map(Into::into).collect(),
        total,
        limit: page.limit,
        offset: page.offset,
    })
}

async fn create(
    State(state): State<AppState>,
    Json(req): Json<CastMemberRequest>,
) -> AppResult<Created<CastMemberResponse>> {
    req.validate()?;
    let member = state.cast_member_service.create(req.into()).await?;
    Ok(Created(member.into()))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<CastMemberResponse>> {
    let member = state.cast_member_service.get(&id).await?;
    Ok(ApiResponse::ok(member.into()))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CastMemberRequest>,
) -> AppResult<ApiResponse<CastMemberResponse>> {
    req.validate()?;
    let member = state.cast_member_service.update(&id, req.into()).await?;
    Ok(ApiResponse::ok(member.into()))
}

async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.cast_member_service.delete(&id).await?;
    Ok(no_content())
}

/// Create the cast members router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(destroy))
}
