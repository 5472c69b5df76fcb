//! Genre repository.

use std::sync::Arc;

use crate::entities::{Genre, genre};
use catalog_common::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Genre repository for database operations.
#[derive(Clone)]
pub struct GenreRepository {
    db: Arc<DatabaseConnection>,
}

impl GenreRepository {
    /// Create a new genre repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a live genre by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<genre::Model>> {
        Genre::find_by_id(id)
            .filter(genre::Column::DeletedAt.is_null())
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a live genre by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<genre::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre {id} not found")))
    }

    /// List live genres, newest first.
    pub async fn find_page(&self, limit: u64, offset: u64) -> AppResult<Vec<genre::Model>> {
        Genre::find()
            .filter(genre::Column::DeletedAt.is_null())
            .order_by_desc(genre::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count live genres.
    pub async fn count(&self) -> AppResult<u64> {
        Genre::find()
            .filter(genre::Column::DeletedAt.is_null())
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new genre.
    pub async fn create(&self, model: genre::ActiveModel) -> AppResult<genre::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a genre.
    pub async fn update(&self, model: genre::ActiveModel) -> AppResult<genre::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Soft-delete a genre. Association rows are left untouched.
    pub async fn soft_delete(&self, id: &str) -> AppResult<()> {
        let existing = self.get_by_id(id).await?;

        let mut model: genre::ActiveModel = existing.into();
        model.deleted_at = Set(Some(Utc::now().into()));
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    /// Of the given ids, return those without a live genre row.
    pub async fn find_missing_ids(&self, ids: &[String]) -> AppResult<Vec<String>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let found: Vec<String> = Genre::find()
            .filter(genre::Column::Id.is_in(ids.iter().cloned()))
            .filter(genre::Column::DeletedAt.is_null())
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .into_iter()
            .map(|g| g.id)
            .collect();

        Ok(ids
            .iter()
            .filter(|id| !found.contains(id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_genre(id: &str, name: &str) -> genre::Model {
        genre::Model {
            id: id.to_string(),
            name: name.to_string(),
            is_active: true,
            created_at: Utc::now().into(),
            updated_at: None,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_page() {
        let g1 = create_test_genre("g1", "Horror");
        let g2 = create_test_genre("g2", "Comedy");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[g1, g2]])
                .into_connection(),
        );

        let repo = GenreRepository::new(db);
        let result = repo.find_page(10, 0).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_find_missing_ids_all_present() {
        let g1 = create_test_genre("g1", "Horror");
        let g2 = create_test_genre("g2", "Comedy");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[g1, g2]])
                .into_connection(),
        );

        let repo = GenreRepository::new(db);
        let missing = repo
            .find_missing_ids(&["g1".to_string(), "g2".to_string()])
            .await
            .unwrap();

        assert!(missing.is_empty());
    }
}
