//! Genre service.

use catalog_common::{AppResult, FieldErrors, IdGenerator};
use catalog_db::entities::genre;
use catalog_db::repositories::GenreRepository;
use sea_orm::ActiveValue::Set;

/// Input for creating or replacing a genre.
#[derive(Debug, Clone, Default)]
pub struct GenreInput {
    pub name: String,
    pub is_active: Option<bool>,
}

/// Service for managing genres.
#[derive(Clone)]
pub struct GenreService {
    repo: GenreRepository,
    id_gen: IdGenerator,
}

impl GenreService {
    /// Create a new genre service.
    #[must_use]
    pub const fn new(repo: GenreRepository) -> Self {
        Self {
            repo,
            id_gen: IdGenerator::new(),
        }
    }

    fn validate(input: &GenreInput) -> AppResult<()> {
        let mut errors = FieldErrors::new();

        if input.name.trim().is_empty() {
            errors.add("name", "is required");
        } else if input.name.len() > 255 {
            errors.add("name", "must be at most 255 characters");
        }

        errors.into_result()
    }

    /// Get a genre by ID.
    pub async fn get(&self, id: &str) -> AppResult<genre::Model> {
        self.repo.get_by_id(id).await
    }

    /// List genres with pagination.
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<genre::Model>> {
        self.repo.find_page(limit, offset).await
    }

    /// Count live genres.
    pub async fn count(&self) -> AppResult<u64> {
        self.repo.count().await
    }

    /// Create a new genre.
    pub async fn create(&self, input: GenreInput) -> AppResult<genre::Model> {
        Self::validate(&input)?;

        let model = genre::ActiveModel {
            id: Set(self.id_gen.generate()),
            name: Set(input.name),
            is_active: Set(input.is_active.unwrap_or(true)),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
            deleted_at: Set(None),
        };

        self.repo.create(model).await
    }

    /// Replace a genre's attributes.
    pub async fn update(&self, id: &str, input: GenreInput) -> AppResult<genre::Model> {
        Self::validate(&input)?;

        let existing = self.repo.get_by_id(id).await?;

        let mut model: genre::ActiveModel = existing.into();
        model.name = Set(input.name);
        if let Some(is_active) = input.is_active {
            model.is_active = Set(is_active);
        }
        model.updated_at = Set(Some(chrono::Utc::now().into()));

        self.repo.update(model).await
    }

    /// Soft-delete a genre.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.soft_delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use catalog_common::AppError;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

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
    async fn test_create_rejects_empty_name() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let service = GenreService::new(GenreRepository::new(db));

        assert!(matches!(
            service.create(GenreInput::default()).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_persists() {
        let created = create_test_genre("g1", "Horror");
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[created]])
                .into_connection(),
        );
        let service = GenreService::new(GenreRepository::new(db));

        let input = GenreInput {
            name: "Horror".to_string(),
            is_active: None,
        };

        let result = service.create(input).await.unwrap();
        assert_eq!(result.name, "Horror");
    }
}
