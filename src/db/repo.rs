use async_trait::async_trait;

use super::model::*;

#[async_trait]
pub trait CategoryRepo: Send + Sync {
    async fn find_by_category_name(&self, name: &str) -> DbResult<Option<Category>>;
    /// Fails with `DbError::AlreadyExists` when the name is taken.
    async fn save(&self, category: &NewCategory) -> DbResult<Category>;
    async fn find_all(&self) -> DbResult<Vec<Category>>;
}
