//! Application state shared across endpoints.

use catalog_core::{CastMemberService, CategoryService, GenreService, VideoService};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub category_service: CategoryService,
    pub genre_service: GenreService,
    pub cast_member_service: CastMemberService,
    pub video_service: VideoService,
}
