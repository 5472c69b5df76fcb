//! API endpoints.

mod cast_members;
mod categories;
mod genres;
mod videos;

use axum::Router;
use serde::Deserialize;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/genres", genres::router())
        .nest("/cast_members", cast_members::router())
        .nest("/videos", videos::router())
}

/// Pagination query parameters shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

const fn default_limit() -> u64 {
    15
}
