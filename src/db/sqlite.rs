use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::model::*;
use super::repo::*;

type CategoryRow = (i64, String, Option<String>);

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub async fn new(db_path: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(db_path)?.create_if_missing(true);

        // An in-memory database lives only as long as a connection to it,
        // so keep exactly one open for the lifetime of the pool.
        let pool_options = if is_in_memory(db_path) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;

        let repo = Self { pool };

        repo.init_schema().await?;

        info!("Database initialized at {}", db_path);

        Ok(repo)
    }

    async fn init_schema(&self) -> DbResult<()> {
        let schema = include_str!("schema.sql");
        sqlx::query(schema).execute(&self.pool).await?;
        Ok(())
    }
}

fn is_in_memory(db_path: &str) -> bool {
    let path = db_path
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    path.starts_with(":memory:") || path.contains("mode=memory")
}

fn row_to_category(row: CategoryRow) -> Category {
    Category {
        id: row.0,
        category_name: row.1,
        created: row.2.and_then(|s| {
            DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        }),
    }
}

#[async_trait]
impl CategoryRepo for SqliteRepository {
    async fn find_by_category_name(&self, name: &str) -> DbResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, category_name, created FROM categories WHERE category_name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result.map(row_to_category))
    }

    async fn save(&self, category: &NewCategory) -> DbResult<Category> {
        let created = Utc::now();

        let result = sqlx::query("INSERT INTO categories (category_name, created) VALUES (?, ?)")
            .bind(&category.category_name)
            .bind(created.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    DbError::AlreadyExists(format!("Category: {}", category.category_name))
                }
                _ => DbError::Sqlx(e),
            })?;

        let id = result.last_insert_rowid();
        debug!(id, name = %category.category_name, "Stored category");

        Ok(Category {
            id,
            category_name: category.category_name.clone(),
            created: Some(created),
        })
    }

    async fn find_all(&self) -> DbResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, category_name, created FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(results.into_iter().map(row_to_category).collect())
    }
}
