//! Video service: create/update transaction orchestration.
//!
//! Creating or updating a video is the one multi-step write in the catalog:
//! the row, its category/genre associations and its uploaded files must land
//! together. Uploads are extracted to stored names first, then the row and
//! association sync run inside a database transaction, then file writes go to
//! the store, and only then does the transaction commit. Any failure before
//! commit deletes exactly the files written so far and rolls back; files
//! replaced by an update are deleted only after commit.

use std::sync::Arc;

use catalog_common::{AppError, AppResult, FieldErrors, FileStoreRef, IdGenerator};
use catalog_db::entities::video;
use catalog_db::repositories::{CategoryRepository, GenreRepository, VideoRepository};
use sea_orm::{ActiveValue::Set, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::upload::{FileField, PendingFile, VideoFiles, extract_files};

/// Accepted age rating codes.
pub const RATING_LIST: [&str; 6] = ["L", "10", "12", "14", "16", "18"];

fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

fn is_mp4(content_type: &str) -> bool {
    content_type == "video/mp4"
}

/// Upload size limits, in bytes.
pub const MAX_BANNER_SIZE: usize = 10 * 1024 * 1024;
pub const MAX_THUMB_SIZE: usize = 5 * 1024 * 1024;
pub const MAX_TRAILER_SIZE: usize = 1024 * 1024 * 1024;
pub const MAX_VIDEO_SIZE: usize = 50 * 1024 * 1024 * 1024;

/// Input for creating or updating a video.
///
/// `categories_id` and `genres_id` are full replacement sets. On create they
/// are required; on update, `None` leaves the existing associations
/// untouched. A present-but-empty list is rejected in both cases: every
/// video keeps at least one category and one genre.
#[derive(Debug, Clone, Default)]
pub struct VideoInput {
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub rating: String,
    pub opened: bool,
    pub categories_id: Option<Vec<String>>,
    pub genres_id: Option<Vec<String>>,
    pub files: VideoFiles,
}

/// A video with its associations and resolved file URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    pub video: video::Model,
    pub categories_id: Vec<String>,
    pub genres_id: Vec<String>,
    pub banner_file_url: Option<String>,
    pub trailer_file_url: Option<String>,
    pub thumb_file_url: Option<String>,
    pub video_file_url: Option<String>,
}

/// Service for managing videos.
#[derive(Clone)]
pub struct VideoService {
    db: Arc<DatabaseConnection>,
    videos: VideoRepository,
    categories: CategoryRepository,
    genres: GenreRepository,
    store: FileStoreRef,
    id_gen: IdGenerator,
}

impl VideoService {
    /// Create a new video service.
    #[must_use]
    pub fn new(
        db: Arc<DatabaseConnection>,
        videos: VideoRepository,
        categories: CategoryRepository,
        genres: GenreRepository,
        store: FileStoreRef,
    ) -> Self {
        Self {
            db,
            videos,
            categories,
            genres,
            store,
            id_gen: IdGenerator::new(),
        }
    }

    fn validate_attributes(input: &VideoInput, errors: &mut FieldErrors) {
        if input.title.trim().is_empty() {
            errors.add("title", "is required");
        } else if input.title.len() > 255 {
            errors.add("title", "must be at most 255 characters");
        }

        if input.description.trim().is_empty() {
            errors.add("description", "is required");
        }

        if !(1000..=9999).contains(&input.year_launched) {
            errors.add("year_launched", "must be a four-digit year");
        }

        if input.duration <= 0 {
            errors.add("duration", "must be a positive number of minutes");
        }

        if !RATING_LIST.contains(&input.rating.as_str()) {
            errors.add("rating", "must be one of L, 10, 12, 14, 16, 18");
        }

        let checks: [(&str, &Option<FileField>, usize, fn(&str) -> bool, &str); 4] = [
            ("banner_file", &input.files.banner_file, MAX_BANNER_SIZE, is_image, "must be an image"),
            ("trailer_file", &input.files.trailer_file, MAX_TRAILER_SIZE, is_mp4, "must be an mp4 video"),
            ("thumb_file", &input.files.thumb_file, MAX_THUMB_SIZE, is_image, "must be an image"),
            ("video_file", &input.files.video_file, MAX_VIDEO_SIZE, is_mp4, "must be an mp4 video"),
        ];
        for (field, value, limit, accepts, type_message) in checks {
            if let Some(FileField::Upload(payload)) = value {
                if payload.data.len() > limit {
                    errors.add(field, format!("must be at most {limit} bytes"));
                }
                if !accepts(&payload.content_type) {
                    errors.add(field, type_message);
                }
            }
        }
    }

    /// Validate input, including that every referenced category and genre id
    /// has a live row. On create the relation lists are required.
    async fn validate(&self, input: &VideoInput, require_relations: bool) -> AppResult<()> {
        let mut errors = FieldErrors::new();
        Self::validate_attributes(input, &mut errors);

        match &input.categories_id {
            Some(ids) if ids.is_empty() => errors.add("categories_id", "must not be empty"),
            Some(ids) => {
                let missing = self.categories.find_missing_ids(ids).await?;
                if !missing.is_empty() {
                    errors.add(
                        "categories_id",
                        format!("invalid or deleted ids: {}", missing.join(", ")),
                    );
                }
            }
            None if require_relations => errors.add("categories_id", "is required"),
            None => {}
        }

        match &input.genres_id {
            Some(ids) if ids.is_empty() => errors.add("genres_id", "must not be empty"),
            Some(ids) => {
                let missing = self.genres.find_missing_ids(ids).await?;
                if !missing.is_empty() {
                    errors.add(
                        "genres_id",
                        format!("invalid or deleted ids: {}", missing.join(", ")),
                    );
                }
            }
            None if require_relations => errors.add("genres_id", "is required"),
            None => {}
        }

        errors.into_result()
    }

    /// Get a video with its associations.
    pub async fn get(&self, id: &str) -> AppResult<VideoDetails> {
        let video = self.videos.get_by_id(id).await?;
        self.details(video).await
    }

    /// List live videos with pagination.
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<video::Model>> {
        self.videos.find_page(limit, offset).await
    }

    /// Count live videos.
    pub async fn count(&self) -> AppResult<u64> {
        self.videos.count().await
    }

    /// Create a video, its associations and its uploaded files atomically.
    pub async fn create(&self, mut input: VideoInput) -> AppResult<VideoDetails> {
        self.validate(&input, true).await?;

        let pending = extract_files(&mut input.files);
        let id = self.id_gen.generate();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        let mut written = Vec::new();

        let result = self.create_in_txn(&txn, &id, &input, &pending, &mut written).await;
        let video = match result {
            Ok(video) => video,
            Err(e) => {
                self.abort(txn, &written).await;
                return Err(e);
            }
        };

        if let Err(e) = txn.commit().await {
            self.delete_keys(&written).await;
            return Err(AppError::Database(e.to_string()));
        }

        self.details(video).await
    }

    async fn create_in_txn(
        &self,
        txn: &DatabaseTransaction,
        id: &str,
        input: &VideoInput,
        pending: &[PendingFile],
        written: &mut Vec<String>,
    ) -> AppResult<video::Model> {
        let model = video::ActiveModel {
            id: Set(id.to_string()),
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            year_launched: Set(input.year_launched),
            duration: Set(input.duration),
            rating: Set(input.rating.clone()),
            opened: Set(input.opened),
            banner_file: Set(input.files.stored_name("banner_file")),
            trailer_file: Set(input.files.stored_name("trailer_file")),
            thumb_file: Set(input.files.stored_name("thumb_file")),
            video_file: Set(input.files.stored_name("video_file")),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
            deleted_at: Set(None),
        };
        let video = self.videos.insert(txn, model).await?;

        // Validated as Some and non-empty above.
        if let Some(ids) = &input.categories_id {
            self.videos.sync_categories(txn, &video.id, ids).await?;
        }
        if let Some(ids) = &input.genres_id {
            self.videos.sync_genres(txn, &video.id, ids).await?;
        }

        self.write_files(&video.id, pending, written).await?;

        Ok(video)
    }

    /// Update a video. Relation lists and file fields left as `None` keep
    /// their current values; a freshly uploaded file replaces the old one,
    /// which is deleted from the store only after the transaction commits.
    pub async fn update(&self, id: &str, mut input: VideoInput) -> AppResult<VideoDetails> {
        self.validate(&input, false).await?;

        let existing = self.videos.get_by_id(id).await?;
        let pending = extract_files(&mut input.files);

        // Stored names being displaced by this update.
        let old_files: Vec<String> = existing
            .file_fields()
            .into_iter()
            .filter_map(|(field, old)| {
                let old = old?;
                let new = input.files.stored_name(field)?;
                (new != old).then(|| format!("{id}/{old}"))
            })
            .collect();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        let mut written = Vec::new();

        let result = self
            .update_in_txn(&txn, existing, &input, &pending, &mut written)
            .await;
        let video = match result {
            Ok(video) => video,
            Err(e) => {
                self.abort(txn, &written).await;
                return Err(e);
            }
        };

        if let Err(e) = txn.commit().await {
            self.delete_keys(&written).await;
            return Err(AppError::Database(e.to_string()));
        }

        // The new state is durable; displaced files are now orphans.
        self.delete_keys(&old_files).await;

        self.details(video).await
    }

    async fn update_in_txn(
        &self,
        txn: &DatabaseTransaction,
        existing: video::Model,
        input: &VideoInput,
        pending: &[PendingFile],
        written: &mut Vec<String>,
    ) -> AppResult<video::Model> {
        let id = existing.id.clone();

        let mut model: video::ActiveModel = existing.into();
        model.title = Set(input.title.clone());
        model.description = Set(input.description.clone());
        model.year_launched = Set(input.year_launched);
        model.duration = Set(input.duration);
        model.rating = Set(input.rating.clone());
        model.opened = Set(input.opened);
        if let Some(name) = input.files.stored_name("banner_file") {
            model.banner_file = Set(Some(name));
        }
        if let Some(name) = input.files.stored_name("trailer_file") {
            model.trailer_file = Set(Some(name));
        }
        if let Some(name) = input.files.stored_name("thumb_file") {
            model.thumb_file = Set(Some(name));
        }
        if let Some(name) = input.files.stored_name("video_file") {
            model.video_file = Set(Some(name));
        }
        model.updated_at = Set(Some(chrono::Utc::now().into()));

        let video = self.videos.update(txn, model).await?;

        if let Some(ids) = &input.categories_id {
            self.videos.sync_categories(txn, &id, ids).await?;
        }
        if let Some(ids) = &input.genres_id {
            self.videos.sync_genres(txn, &id, ids).await?;
        }

        self.write_files(&id, pending, written).await?;

        Ok(video)
    }

    /// Soft-delete a video. Stored files are kept.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.videos.soft_delete(id).await
    }

    async fn write_files(
        &self,
        video_id: &str,
        pending: &[PendingFile],
        written: &mut Vec<String>,
    ) -> AppResult<()> {
        for file in pending {
            let key = format!("{video_id}/{}", file.stored_name);
            self.store.put(&key, &file.payload.data).await?;
            written.push(key);
        }
        Ok(())
    }

    /// Undo a failed create/update: remove the files written so far, then
    /// roll the transaction back.
    async fn abort(&self, txn: DatabaseTransaction, written: &[String]) {
        self.delete_keys(written).await;
        if let Err(e) = txn.rollback().await {
            tracing::warn!(error = %e, "transaction rollback failed");
        }
    }

    async fn delete_keys(&self, keys: &[String]) {
        for key in keys {
            if let Err(e) = self.store.delete(key).await {
                tracing::warn!(%key, error = %e, "failed to delete stored file");
            }
        }
    }

    async fn details(&self, video: video::Model) -> AppResult<VideoDetails> {
        let categories_id = self.videos.category_ids(self.db.as_ref(), &video.id).await?;
        let genres_id = self.videos.genre_ids(self.db.as_ref(), &video.id).await?;

        let url = |name: Option<&str>| {
            name.map(|n| self.store.public_url(&format!("{}/{n}", video.id)))
        };
        let banner_file_url = url(video.banner_file.as_deref());
        let trailer_file_url = url(video.trailer_file.as_deref());
        let thumb_file_url = url(video.thumb_file.as_deref());
        let video_file_url = url(video.video_file.as_deref());

        Ok(VideoDetails {
            video,
            categories_id,
            genres_id,
            banner_file_url,
            trailer_file_url,
            thumb_file_url,
            video_file_url,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::upload::{FileField, FilePayload};
    use async_trait::async_trait;
    use catalog_common::FileStore;
    use catalog_db::entities::{category, category_video, genre, genre_video};
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Mutex;

    /// File store spy that records keys and can fail after N puts.
    #[derive(Default)]
    struct RecordingStore {
        puts: Mutex<Vec<String>>,
        deletes: Mutex<Vec<String>>,
        fail_after_puts: Option<usize>,
    }

    impl RecordingStore {
        fn puts(&self) -> Vec<String> {
            self.puts.lock().unwrap().clone()
        }

        fn deletes(&self) -> Vec<String> {
            self.deletes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FileStore for RecordingStore {
        async fn put(&self, key: &str, _data: &[u8]) -> AppResult<()> {
            let mut puts = self.puts.lock().unwrap();
            if let Some(limit) = self.fail_after_puts
                && puts.len() >= limit
            {
                return Err(AppError::FileStore("disk full".to_string()));
            }
            puts.push(key.to_string());
            Ok(())
        }

        async fn delete(&self, key: &str) -> AppResult<()> {
            self.deletes.lock().unwrap().push(key.to_string());
            Ok(())
        }

        async fn exists(&self, key: &str) -> AppResult<bool> {
            Ok(self.puts.lock().unwrap().iter().any(|k| k == key))
        }

        async fn get(&self, _key: &str) -> AppResult<Vec<u8>> {
            Err(AppError::FileStore("not supported".to_string()))
        }

        fn public_url(&self, key: &str) -> String {
            format!("http://localhost/files/{key}")
        }
    }

    fn test_video(id: &str) -> video::Model {
        video::Model {
            id: id.to_string(),
            title: "A Movie".to_string(),
            description: "Synopsis".to_string(),
            year_launched: 2020,
            duration: 120,
            rating: "L".to_string(),
            opened: false,
            banner_file: None,
            trailer_file: None,
            thumb_file: None,
            video_file: None,
            created_at: Utc::now().into(),
            updated_at: None,
            deleted_at: None,
        }
    }

    fn test_category(id: &str) -> category::Model {
        category::Model {
            id: id.to_string(),
            name: "Drama".to_string(),
            description: None,
            is_active: true,
            created_at: Utc::now().into(),
            updated_at: None,
            deleted_at: None,
        }
    }

    fn test_genre(id: &str) -> genre::Model {
        genre::Model {
            id: id.to_string(),
            name: "Horror".to_string(),
            is_active: true,
            created_at: Utc::now().into(),
            updated_at: None,
            deleted_at: None,
        }
    }

    fn valid_input() -> VideoInput {
        VideoInput {
            title: "A Movie".to_string(),
            description: "Synopsis".to_string(),
            year_launched: 2020,
            duration: 120,
            rating: "L".to_string(),
            opened: false,
            categories_id: Some(vec!["cat1".to_string()]),
            genres_id: Some(vec!["gen1".to_string()]),
            files: VideoFiles::default(),
        }
    }

    fn upload(name: &str, content_type: &str, size: usize) -> FileField {
        FileField::Upload(FilePayload {
            original_name: name.to_string(),
            content_type: content_type.to_string(),
            data: vec![0; size],
        })
    }

    fn service_on(db: Arc<DatabaseConnection>, store: Arc<RecordingStore>) -> VideoService {
        VideoService::new(
            Arc::clone(&db),
            VideoRepository::new(Arc::clone(&db)),
            CategoryRepository::new(Arc::clone(&db)),
            GenreRepository::new(db),
            store,
        )
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_attributes() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let service = service_on(db, Arc::new(RecordingStore::default()));

        let input = VideoInput {
            title: String::new(),
            rating: "PG-13".to_string(),
            year_launched: 99,
            duration: 0,
            categories_id: Some(vec![]),
            genres_id: None,
            ..VideoInput::default()
        };

        match service.create(input).await {
            Err(AppError::Validation(errors)) => {
                for field in ["title", "rating", "year_launched", "duration", "categories_id", "genres_id"] {
                    assert!(errors.0.contains_key(field), "missing error for {field}");
                }
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_relation_ids() {
        // Neither relation lookup finds a row.
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<category::Model>::new()])
                .append_query_results([Vec::<genre::Model>::new()])
                .into_connection(),
        );
        let store = Arc::new(RecordingStore::default());
        let service = service_on(db, Arc::clone(&store));

        match service.create(valid_input()).await {
            Err(AppError::Validation(errors)) => {
                assert!(errors.0.contains_key("categories_id"));
                assert!(errors.0.contains_key("genres_id"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(store.puts().is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_empty_relation_list() {
        // Present-but-empty replacement sets are refused; stripping every
        // category or genre from a video is not allowed.
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let service = service_on(db, Arc::new(RecordingStore::default()));

        let mut input = valid_input();
        input.categories_id = Some(vec![]);
        input.genres_id = None;

        match service.update("vid1", input).await {
            Err(AppError::Validation(errors)) => {
                assert_eq!(
                    errors.0["categories_id"],
                    vec!["must not be empty".to_string()]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejects_wrong_file_content_types() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let service = service_on(db, Arc::new(RecordingStore::default()));

        let mut input = valid_input();
        input.categories_id = None;
        input.genres_id = None;
        input.files.banner_file = Some(upload("banner.mp4", "video/mp4", 16));
        input.files.video_file = Some(upload("movie.mkv", "video/x-matroska", 16));

        match service.update("vid1", input).await {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.0["banner_file"], vec!["must be an image".to_string()]);
                assert_eq!(
                    errors.0["video_file"],
                    vec!["must be an mp4 video".to_string()]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejects_oversized_thumb() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let service = service_on(db, Arc::new(RecordingStore::default()));

        let mut input = valid_input();
        input.categories_id = None;
        input.genres_id = None;
        input.files.thumb_file = Some(upload("thumb.png", "image/png", MAX_THUMB_SIZE + 1));

        match service.update("vid1", input).await {
            Err(AppError::Validation(errors)) => {
                assert!(errors.0.contains_key("thumb_file"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_writes_row_relations_and_files() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                // relation existence checks
                .append_query_results([[test_category("cat1")]])
                .append_query_results([[test_genre("gen1")]])
                // insert returning
                .append_query_results([[test_video("vid1")]])
                // sync reads: no current associations
                .append_query_results([Vec::<category_video::Model>::new()])
                .append_query_results([Vec::<genre_video::Model>::new()])
                // association inserts
                .append_exec_results([
                    MockExecResult { last_insert_id: 0, rows_affected: 1 },
                    MockExecResult { last_insert_id: 0, rows_affected: 1 },
                ])
                // post-commit association reads for the response
                .append_query_results([vec![category_video::Model {
                    category_id: "cat1".to_string(),
                    video_id: "vid1".to_string(),
                }]])
                .append_query_results([vec![genre_video::Model {
                    genre_id: "gen1".to_string(),
                    video_id: "vid1".to_string(),
                }]])
                .into_connection(),
        );
        let store = Arc::new(RecordingStore::default());
        let service = service_on(db, Arc::clone(&store));

        let mut input = valid_input();
        input.files.thumb_file = Some(upload("thumb.png", "image/png", 16));

        let details = service.create(input).await.unwrap();

        assert_eq!(details.categories_id, vec!["cat1".to_string()]);
        assert_eq!(details.genres_id, vec!["gen1".to_string()]);

        let puts = store.puts();
        assert_eq!(puts.len(), 1);
        assert!(puts[0].starts_with("vid1/"), "key should be scoped to the video: {puts:?}");
        assert!(store.deletes().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_removes_written_files() {
        // Second put fails: the first file is already on disk and must be
        // removed before the error propagates.
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_category("cat1")]])
                .append_query_results([[test_genre("gen1")]])
                .append_query_results([[test_video("vid1")]])
                .append_query_results([Vec::<category_video::Model>::new()])
                .append_query_results([Vec::<genre_video::Model>::new()])
                .append_exec_results([
                    MockExecResult { last_insert_id: 0, rows_affected: 1 },
                    MockExecResult { last_insert_id: 0, rows_affected: 1 },
                ])
                .into_connection(),
        );
        let store = Arc::new(RecordingStore {
            fail_after_puts: Some(1),
            ..RecordingStore::default()
        });
        let service = service_on(db, Arc::clone(&store));

        let mut input = valid_input();
        input.files.banner_file = Some(upload("banner.jpg", "image/jpeg", 16));
        input.files.thumb_file = Some(upload("thumb.png", "image/png", 16));

        assert!(matches!(
            service.create(input).await,
            Err(AppError::FileStore(_))
        ));

        let puts = store.puts();
        assert_eq!(puts.len(), 1);
        assert_eq!(store.deletes(), puts, "the written file must be cleaned up");
    }

    #[tokio::test]
    async fn test_update_failure_keeps_old_files() {
        // Second put fails mid-update: the file written so far is removed,
        // the transaction rolls back, and the files the row already owned
        // are never touched.
        let mut existing = test_video("vid1");
        existing.banner_file = Some("old-banner.jpg".to_string());

        let updated = existing.clone();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing]])
                .append_query_results([[updated]])
                .into_connection(),
        );
        let store = Arc::new(RecordingStore {
            fail_after_puts: Some(1),
            ..RecordingStore::default()
        });
        let service = service_on(db, Arc::clone(&store));

        let mut input = valid_input();
        input.categories_id = None;
        input.genres_id = None;
        input.files.banner_file = Some(upload("banner.jpg", "image/jpeg", 16));
        input.files.thumb_file = Some(upload("thumb.png", "image/png", 16));

        assert!(matches!(
            service.update("vid1", input).await,
            Err(AppError::FileStore(_))
        ));

        let puts = store.puts();
        assert_eq!(puts.len(), 1);
        assert_eq!(store.deletes(), puts, "only the newly written key is removed");
        assert!(
            !store.deletes().contains(&"vid1/old-banner.jpg".to_string()),
            "the previous banner must survive a failed update"
        );
    }

    #[tokio::test]
    async fn test_update_deletes_replaced_file_after_commit() {
        let mut existing = test_video("vid1");
        existing.thumb_file = Some("old-thumb.png".to_string());

        let mut updated = existing.clone();
        updated.thumb_file = Some("new-thumb.png".to_string());

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                // get_by_id
                .append_query_results([[existing]])
                // update returning
                .append_query_results([[updated]])
                // post-commit association reads
                .append_query_results([Vec::<category_video::Model>::new()])
                .append_query_results([Vec::<genre_video::Model>::new()])
                .into_connection(),
        );
        let store = Arc::new(RecordingStore::default());
        let service = service_on(db, Arc::clone(&store));

        let mut input = valid_input();
        input.categories_id = None;
        input.genres_id = None;
        input.files.thumb_file = Some(upload("thumb.png", "image/png", 16));

        let details = service.update("vid1", input).await.unwrap();

        assert_eq!(
            details.thumb_file_url.as_deref(),
            Some("http://localhost/files/vid1/new-thumb.png")
        );
        assert_eq!(store.deletes(), vec!["vid1/old-thumb.png".to_string()]);
    }

    #[tokio::test]
    async fn test_update_without_relations_leaves_associations_alone() {
        let existing = test_video("vid1");
        let updated = existing.clone();

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing]])
                .append_query_results([[updated]])
                .append_query_results([vec![category_video::Model {
                    category_id: "cat1".to_string(),
                    video_id: "vid1".to_string(),
                }]])
                .append_query_results([Vec::<genre_video::Model>::new()])
                .into_connection(),
        );
        let store = Arc::new(RecordingStore::default());
        let service = service_on(db, store);

        let mut input = valid_input();
        input.categories_id = None;
        input.genres_id = None;

        let details = service.update("vid1", input).await.unwrap();

        // No sync ran; the response simply reflects what is persisted.
        assert_eq!(details.categories_id, vec!["cat1".to_string()]);
    }
}
