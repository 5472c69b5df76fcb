//! Cast member repository.

use std::sync::Arc;

use crate::entities::{CastMember, cast_member};
use catalog_common::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Cast member repository for database operations.
#[derive(Clone)]
pub struct CastMemberRepository {
    db: Arc<DatabaseConnection>,
}

impl CastMemberRepository {
    /// Create a new cast member repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a live cast member by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<cast_member::Model>> {
        CastMember::find_by_id(id)
            .filter(cast_member::Column::DeletedAt.is_null())
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a live cast member by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<cast_member::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cast member {id} not found")))
    }

    /// List live cast members, newest first.
    pub async fn find_page(&self, limit: u64, offset: u64) -> AppResult<Vec<cast_member::Model>> {
        CastMember::find()
            .filter(cast_member::Column::DeletedAt.is_null())
            .order_by_desc(cast_member::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count live cast members.
    pub async fn count(&self) -> AppResult<u64> {
        CastMember::find()
            .filter(cast_member::Column::DeletedAt.is_null())
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new cast member.
    pub async fn create(&self, model: cast_member::ActiveModel) -> AppResult<cast_member::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a cast member.
    pub async fn update(&self, model: cast_member::ActiveModel) -> AppResult<cast_member::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Soft-delete a cast member.
    pub async fn soft_delete(&self, id: &str) -> AppResult<()> {
        let existing = self.get_by_id(id).await?;

        let mut model: cast_member::ActiveModel = existing.into();
        model.deleted_at = Set(Some(Utc::now().into()));
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::entities::cast_member::KIND_ACTOR;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_member(id: &str, name: &str) -> cast_member::Model {
        cast_member::Model {
            id: id.to_string(),
            name: name.to_string(),
            kind: KIND_ACTOR,
            created_at: Utc::now().into(),
            updated_at: None,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let member = create_test_member("cm1", "Jane Doe");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[member]])
                .into_connection(),
        );

        let repo = CastMemberRepository::new(db);
        let result = repo.find_by_id("cm1").await.unwrap();

        assert_eq!(result.unwrap().kind, KIND_ACTOR);
    }
}
