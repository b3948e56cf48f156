use std::sync::Arc;

use tracing::info;

use crate::db::{Category, CategoryRepo, DbError, DbResult, NewCategory};
use super::types::CategoryError;

/// Category registrar. Name uniqueness is owned by the repository, so
/// registration never reads before it writes.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepo>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepo>) -> Self {
        Self { repo }
    }

    /// Absence is a normal outcome, not an error.
    pub async fn read_category(&self, name: &str) -> DbResult<Option<Category>> {
        self.repo.find_by_category_name(name).await
    }

    pub async fn create_category(&self, category: &NewCategory) -> DbResult<Category> {
        self.repo.save(category).await
    }

    pub async fn list_categories(&self) -> DbResult<Vec<Category>> {
        self.repo.find_all().await
    }

    pub async fn register(&self, category: NewCategory) -> Result<Category, CategoryError> {
        match self.create_category(&category).await {
            Ok(stored) => {
                info!(id = stored.id, name = %stored.category_name, "Created category");
                Ok(stored)
            }
            Err(DbError::AlreadyExists(_)) => Err(CategoryError::Duplicate(category.category_name)),
            Err(e) => Err(e.into()),
        }
    }
}
