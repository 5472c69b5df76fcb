//! Video repository and many-to-many relation synchronizer.
//!
//! Methods that participate in the video create/update transaction are
//! generic over [`ConnectionTrait`] so callers can run them against either
//! the pooled connection or an open transaction.

use std::sync::Arc;

use crate::entities::{CategoryVideo, GenreVideo, Video, category_video, genre_video, video};
use catalog_common::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Video repository for database operations.
#[derive(Clone)]
pub struct VideoRepository {
    db: Arc<DatabaseConnection>,
}

/// Additions and removals needed to make `current` equal `target`.
fn relation_diff(current: &[String], target: &[String]) -> (Vec<String>, Vec<String>) {
    let additions = target
        .iter()
        .filter(|id| !current.contains(id))
        .cloned()
        .collect();
    let removals = current
        .iter()
        .filter(|id| !target.contains(id))
        .cloned()
        .collect();
    (additions, removals)
}

impl VideoRepository {
    /// Create a new video repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a live video by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<video::Model>> {
        Video::find_by_id(id)
            .filter(video::Column::DeletedAt.is_null())
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a live video by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<video::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Video {id} not found")))
    }

    /// List live videos, newest first.
    pub async fn find_page(&self, limit: u64, offset: u64) -> AppResult<Vec<video::Model>> {
        Video::find()
            .filter(video::Column::DeletedAt.is_null())
            .order_by_desc(video::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count live videos.
    pub async fn count(&self) -> AppResult<u64> {
        Video::find()
            .filter(video::Column::DeletedAt.is_null())
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a video row on the given connection.
    pub async fn insert<C: ConnectionTrait>(
        &self,
        conn: &C,
        model: video::ActiveModel,
    ) -> AppResult<video::Model> {
        model
            .insert(conn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a video row on the given connection.
    pub async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        model: video::ActiveModel,
    ) -> AppResult<video::Model> {
        model
            .update(conn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Soft-delete a video. Association rows and stored files are left
    /// untouched; deletion is logical only.
    pub async fn soft_delete(&self, id: &str) -> AppResult<()> {
        let existing = self.get_by_id(id).await?;

        let mut model: video::ActiveModel = existing.into();
        model.deleted_at = Set(Some(Utc::now().into()));
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    /// Category ids currently associated with a video.
    pub async fn category_ids<C: ConnectionTrait>(
        &self,
        conn: &C,
        video_id: &str,
    ) -> AppResult<Vec<String>> {
        let rows = CategoryVideo::find()
            .filter(category_video::Column::VideoId.eq(video_id))
            .all(conn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|r| r.category_id).collect())
    }

    /// Genre ids currently associated with a video.
    pub async fn genre_ids<C: ConnectionTrait>(
        &self,
        conn: &C,
        video_id: &str,
    ) -> AppResult<Vec<String>> {
        let rows = GenreVideo::find()
            .filter(genre_video::Column::VideoId.eq(video_id))
            .all(conn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|r| r.genre_id).collect())
    }

    /// Make the persisted category associations of a video exactly equal
    /// the target set. Removals are applied before additions. An empty
    /// target clears all associations.
    ///
    /// Target ids are validated against live rows upstream; a foreign-key
    /// violation still surfaces as a database error rather than a partial
    /// apply, because the caller runs this inside its transaction.
    pub async fn sync_categories<C: ConnectionTrait>(
        &self,
        conn: &C,
        video_id: &str,
        target: &[String],
    ) -> AppResult<()> {
        let current = self.category_ids(conn, video_id).await?;
        let (additions, removals) = relation_diff(&current, target);

        if !removals.is_empty() {
            CategoryVideo::delete_many()
                .filter(category_video::Column::VideoId.eq(video_id))
                .filter(category_video::Column::CategoryId.is_in(removals))
                .exec(conn)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }

        if !additions.is_empty() {
            let rows = additions.into_iter().map(|category_id| {
                category_video::ActiveModel {
                    category_id: Set(category_id),
                    video_id: Set(video_id.to_string()),
                }
            });
            CategoryVideo::insert_many(rows)
                .exec(conn)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }

        Ok(())
    }

    /// Make the persisted genre associations of a video exactly equal the
    /// target set. See [`Self::sync_categories`].
    pub async fn sync_genres<C: ConnectionTrait>(
        &self,
        conn: &C,
        video_id: &str,
        target: &[String],
    ) -> AppResult<()> {
        let current = self.genre_ids(conn, video_id).await?;
        let (additions, removals) = relation_diff(&current, target);

        if !removals.is_empty() {
            GenreVideo::delete_many()
                .filter(genre_video::Column::VideoId.eq(video_id))
                .filter(genre_video::Column::GenreId.is_in(removals))
                .exec(conn)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }

        if !additions.is_empty() {
            let rows = additions.into_iter().map(|genre_id| genre_video::ActiveModel {
                genre_id: Set(genre_id),
                video_id: Set(video_id.to_string()),
            });
            GenreVideo::insert_many(rows)
                .exec(conn)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }

        Ok(())
    }
}
