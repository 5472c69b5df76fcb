//! Category service.

use catalog_common::{AppResult, FieldErrors, IdGenerator};
use catalog_db::entities::category;
use catalog_db::repositories::CategoryRepository;
use sea_orm::ActiveValue::Set;

/// Input for creating or replacing a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Service for managing categories.
#[derive(Clone)]
pub struct CategoryService {
    repo: CategoryRepository,
    id_gen: IdGenerator,
}

impl CategoryService {
    /// Create a new category service.
    #[must_use]
    pub const fn new(repo: CategoryRepository) -> Self {
        Self {
            repo,
            id_gen: IdGenerator::new(),
        }
    }

    fn validate(input: &CategoryInput) -> AppResult<()> {
        let mut errors = FieldErrors::new();

        if input.name.trim().is_empty() {
            errors.add("name", "is required");
        } else if input.name.len() > 255 {
            errors.add("name", "must be at most 255 characters");
        }

        errors.into_result()
    }

    /// Get a category by ID.
    pub async fn get(&self, id: &str) -> AppResult<category::Model> {
        self.repo.get_by_id(id).await
    }

    /// List categories with pagination.
    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<category::Model>> {
        self.repo.find_page(limit, offset).await
    }

    /// Count live categories.
    pub async fn count(&self) -> AppResult<u64> {
        self.repo.count().await
    }

    /// Create a new category.
    pub async fn create(&self, input: CategoryInput) -> AppResult<category::Model> {
        Self::validate(&input)?;

        let model = category::ActiveModel {
            id: Set(self.id_gen.generate()),
            name: Set(input.name),
            description: Set(input.description),
            is_active: Set(input.is_active.unwrap_or(true)),
            created_at: Set(chrono::Utc::now().into()),
            updated_at: Set(None),
            deleted_at: Set(None),
        };

        self.repo.create(model).await
    }

    /// Replace a category's attributes.
    pub async fn update(&self, id: &str, input: CategoryInput) -> AppResult<category::Model> {
        Self::validate(&input)?;

        let existing = self.repo.get_by_id(id).await?;

        let mut model: category::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.description = Set(input.description);
        if let Some(is_active) = input.is_active {
            model.is_active = Set(is_active);
        }
        model.updated_at = Set(Some(chrono::Utc::now().into()));

        self.repo.update(model).await
    }

    /// Soft-delete a category.
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

    fn create_test_category(id: &str, name: &str) -> category::Model {
        category::Model {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            is_active: true,
            created_at: Utc::now().into(),
            updated_at: None,
            deleted_at: None,
        }
    }

    fn service_with(results: Vec<Vec<category::Model>>) -> CategoryService {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(results)
                .into_connection(),
        );
        CategoryService::new(CategoryRepository::new(db))
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let service = service_with(vec![]);

        let result = service.create(CategoryInput::default()).await;

        match result {
            Err(AppError::Validation(errors)) => {
                assert!(errors.0.contains_key("name"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_overlong_name() {
        let service = service_with(vec![]);

        let input = CategoryInput {
            name: "x".repeat(256),
            ..CategoryInput::default()
        };

        assert!(matches!(
            service.create(input).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_persists_with_defaults() {
        let created = create_test_category("cat1", "Drama");
        let service = service_with(vec![vec![created]]);

        let input = CategoryInput {
            name: "Drama".to_string(),
            ..CategoryInput::default()
        };

        let result = service.create(input).await.unwrap();
        assert_eq!(result.name, "Drama");
        assert!(result.is_active);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let service = service_with(vec![vec![]]);

        assert!(matches!(
            service.get("missing").await,
            Err(AppError::NotFound(_))
        ));
    }
}
