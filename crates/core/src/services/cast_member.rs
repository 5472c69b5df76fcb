//! Cast member service.

use catalog_common::{AppResult, FieldErrors, IdGenerator};
use catalog_db::entities::cast_member::{self, KIND_ACTOR, KIND_DIRECTOR};
use catalog_db::repositories::CastMemberRepository;
use sea_orm::ActiveValue::Set;

/// Input for creating or replacing a cast member.
#[derive(Debug, Clone, Default)]
pub struct CastMemberInput {
    pub name: String,
    /// 1 - director, 2 - actor.
    pub kind: Option<i16>,
}

/// Service for managing cast members.
#[derive(Clone)]
pub struct CastMemberService {
    repo: CastMemberRepository,
    id_gen: IdGenerator,
}

impl CastMemberService {
    /// Create a new cast member service.
    #[must_use]
    pub const fn new(repo: CastMemberRepository) -> Self {
        Self {
            repo,
            id_gen: IdGenerator::new(),
        }
    }

    fn validate(input: &CastMemberInput) -> AppResult<i16> {
        let mut errors = FieldErrors::new();

        if input.name.trim().is_empty() {
            errors.add("name", "is required");
        } else if input.name.len() > 255 {
            errors.add("name", "must be at most 255 characters");
        }

        let kind = match input.kind {
            Some(kind) if kind == KIND_DIRECTOR || kind == KIND_ACTOR => kind,
            Some(_) => {
                errors.add("kind", "must be 1 (director) or 2 (actor)");
                0
            }
            None => {
                errors.add("kind", "is required");
                0
            }
        };

        errors.into_result()?;
        Ok(kind)
    }

    /// Get a cast member by ID.
    pub async fn get(&self, id: &str) -> AppResult<cast_member::Model> {
        self.repo.get_by_id(id).await
    }

    /// List cast members with pagination.
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<cast_member::Model>> {
        self.repo.find_page(limit, offset).await
    }

    /// Count live cast members.
    pub async fn count(&self) -> AppResult<u64> {
        self.repo.count().await
    }

    /// Create a new cast member.
    pub async fn create(&self, input: CastMemberInput) -> AppResult<cast_member::Model> {
        let kind = Self::validate(&input)?;

        let model = cast_member::ActiveModel {
            id: Set(self.id_gen.generate()),
            name: Set(input.name),
            kind: Set(kind),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
            deleted_at: Set(None),
        };

        self.repo.create(model).await
    }

    /// Replace a cast member's attributes.
    pub async fn update(&self, id: &str, input: CastMemberInput) -> AppResult<cast_member::Model> {
        let kind = Self::validate(&input)?;

        let existing = self.repo.get_by_id(id).await?;

        let mut model: cast_member::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.kind = Set(kind);
        model.updated_at = Set(Some(chrono::Utc::now().into()));

        self.repo.update(model).await
    }

    /// Soft-delete a cast member.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.soft_delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use catalog_common::AppError;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn service() -> CastMemberService {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        CastMemberService::new(CastMemberRepository::new(db))
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_kind() {
        let input = CastMemberInput {
            name: "Jane Doe".to_string(),
            kind: Some(7),
        };

        match service().create(input).await {
            Err(AppError::Validation(errors)) => {
                assert!(errors.0.contains_key("kind"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_requires_kind() {
        let input = CastMemberInput {
            name: "Jane Doe".to_string(),
            kind: None,
        };

        assert!(matches!(
            service().create(input).await,
            Err(AppError::Validation(_))
        ));
    }
}
