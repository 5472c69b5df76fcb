//! Video endpoints.
//!
//! Create and update consume `multipart/form-data`: text fields for the
//! scalar attributes, repeated `categories_id` / `genres_id` fields for the
//! association sets, and up to four file fields. Responses carry public URLs
//! for stored files, never the stored names themselves.

use axum::{
    Router,
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::StatusCode,
    routing::get,
};
use catalog_common::{AppError, AppResult};
use catalog_core::video::{MAX_BANNER_SIZE, MAX_THUMB_SIZE, MAX_TRAILER_SIZE, MAX_VIDEO_SIZE};
use catalog_core::{FileField, FilePayload, VideoDetails, VideoInput};
use catalog_db::entities::video;
use serde::Serialize;

use crate::{
    endpoints::PageQuery,
    middleware::AppState,
    response::{ApiResponse, Created, Paginated, no_content},
};

/// Full video response with associations and file URLs.
#[derive(Serialize)]
pub struct VideoResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub rating: String,
    pub opened: bool,
    pub categories_id: Vec<String>,
    pub genres_id: Vec<String>,
    pub banner_file_url: Option<String>,
    pub trailer_file_url: Option<String>,
    pub thumb_file_url: Option<String>,
    pub video_file_url: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<VideoDetails> for VideoResponse {
    fn from(d: VideoDetails) -> Self {
        let v = d.video;
        Self {
            id: v.id,
            title: v.title,
            description: v.description,
            year_launched: v.year_launched,
            duration: v.duration,
            rating: v.rating,
            opened: v.opened,
            categories_id: d.categories_id,
            genres_id: d.genres_id,
            banner_file_url: d.banner_file_url,
            trailer_file_url: d.trailer_file_url,
            thumb_file_url: d.thumb_file_url,
            video_file_url: d.video_file_url,
            created_at: v.created_at.to_rfc3339(),
            updated_at: v.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// List item: scalar attributes only.
#[derive(Serialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub rating: String,
    pub opened: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<video::Model> for VideoSummary {
    fn from(v: video::Model) -> Self {
        Self {
            id: v.id,
            title: v.title,
            description: v.description,
            year_launched: v.year_launched,
            duration: v.duration,
            rating: v.rating,
            opened: v.opened,
            created_at: v.created_at.to_rfc3339(),
            updated_at: v.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn field_file(field: axum::extract::multipart::Field<'_>) -> AppResult<FileField> {
    let original_name = field
        .file_name()
        .map_or_else(|| "unnamed".to_string(), ToString::to_string);
    let content_type = field
        .content_type()
        .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
        .to_vec();

    Ok(FileField::Upload(FilePayload {
        original_name,
        content_type,
        data,
    }))
}

/// Parse the multipart form into a [`VideoInput`].
///
/// An association field that appears with an empty value marks the list as
/// present-but-empty, which validation rejects downstream; a field that
/// never appears leaves the list `None`, keeping the current associations
/// on update.
async fn parse_video_form(mut multipart: Multipart) -> AppResult<VideoInput> {
    let mut input = VideoInput::default();
    let mut categories: Option<Vec<String>> = None;
    let mut genres: Option<Vec<String>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "title" => input.title = field_text(field).await?,
            "description" => input.description = field_text(field).await?,
            "year_launched" => {
                let text = field_text(field).await?;
                input.year_launched = text
                    .parse()
                    .map_err(|_| AppError::validation("year_launched", "must be an integer"))?;
            }
            "duration" => {
                let text = field_text(field).await?;
                input.duration = text
                    .parse()
                    .map_err(|_| AppError::validation("duration", "must be an integer"))?;
            }
            "rating" => input.rating = field_text(field).await?,
            "opened" => {
                let text = field_text(field).await?;
                input.opened = text == "true" || text == "1";
            }
            "categories_id" | "categories_id[]" => {
                let text = field_text(field).await?;
                let list = categories.get_or_insert_with(Vec::new);
                if !text.is_empty() {
                    list.push(text);
                }
            }
            "genres_id" | "genres_id[]" => {
                let text = field_text(field).await?;
                let list = genres.get_or_insert_with(Vec::new);
                if !text.is_empty() {
                    list.push(text);
                }
            }
            "banner_file" => input.files.banner_file = Some(field_file(field).await?),
            "trailer_file" => input.files.trailer_file = Some(field_file(field).await?),
            "thumb_file" => input.files.thumb_file = Some(field_file(field).await?),
            "video_file" => input.files.video_file = Some(field_file(field).await?),
            other => {
                tracing::debug!(field = other, "ignoring unknown multipart field");
            }
        }
    }

    input.categories_id = categories;
    input.genres_id = genres;
    Ok(input)
}

async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Paginated<VideoSummary>> {
    let total = state.video_service.count().await?;
    let items = state.video_service.list(page.limit, page.offset).await?;

    Ok(Paginated {
        data: items.into_iter().map(Into::into).collect(),
        total,
        limit: page.limit,
        offset: page.offset,
    })
}

async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Created<VideoResponse>> {
    let input = parse_video_form(multipart).await?;
    let details = state.video_service.create(input).await?;
    Ok(Created(details.into()))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<VideoResponse>> {
    let details = state.video_service.get(&id).await?;
    Ok(ApiResponse::ok(details.into()))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<ApiResponse<VideoResponse>> {
    let input = parse_video_form(multipart).await?;
    let details = state.video_service.update(&id, input).await?;
    Ok(ApiResponse::ok(details.into()))
}

async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.video_service.delete(&id).await?;
    Ok(no_content())
}

/// Create the videos router.
///
/// The body limit accommodates all four files in a single request; oversized
/// individual files are rejected by validation with a field-keyed error.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(show).put(update).delete(destroy))
        .layer(DefaultBodyLimit::max(
            MAX_VIDEO_SIZE + MAX_TRAILER_SIZE + MAX_BANNER_SIZE + MAX_THUMB_SIZE,
        ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_video_response_hides_stored_names() {
        let details = VideoDetails {
            video: video::Model {
                id: "vid1".to_string(),
                title: "A Movie".to_string(),
                description: "Synopsis".to_string(),
                year_launched: 2020,
                duration: 120,
                rating: "L".to_string(),
                opened: false,
                banner_file: Some("secret-name.jpg".to_string()),
                trailer_file: None,
                thumb_file: None,
                video_file: None,
                created_at: chrono::Utc::now().into(),
                updated_at: None,
                deleted_at: None,
            },
            categories_id: vec![],
            genres_id: vec![],
            banner_file_url: Some("http://localhost/files/vid1/secret-name.jpg".to_string()),
            trailer_file_url: None,
            thumb_file_url: None,
            video_file_url: None,
        };

        let json = serde_json::to_value(VideoResponse::from(details)).unwrap();
        assert!(json.get("banner_file").is_none());
        assert_eq!(
            json["banner_file_url"],
            "http://localhost/files/vid1/secret-name.jpg"
        );
    }
}
