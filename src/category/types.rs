use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::db::{DbError, NewCategory};

pub const MSG_CREATED: &str = "created the category";
pub const MSG_ALREADY_EXISTS: &str = "category already exists";
pub const MSG_NOT_FOUND: &str = "category not found";

/// Outcome body for mutating category requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub category_name: Option<String>,
}

impl CreateCategoryRequest {
    /// Rejects a missing or blank name. The name is kept as submitted.
    pub fn validate(self) -> Result<NewCategory, CategoryError> {
        match self.category_name {
            None => Err(CategoryError::Invalid("categoryName is required".to_string())),
            Some(name) if name.trim().is_empty() => Err(CategoryError::Invalid(
                "categoryName must not be blank".to_string(),
            )),
            Some(name) => Ok(NewCategory::new(name)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Category already exists: {0}")]
    Duplicate(String),
    #[error("Invalid request: {0}")]
    Invalid(String),
    #[error(transparent)]
    Database(#[from] DbError),
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CategoryError::Duplicate(name) => {
                info!(name = %name, "Rejected duplicate category");
                (StatusCode::CONFLICT, MSG_ALREADY_EXISTS.to_string())
            }
            CategoryError::Invalid(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            CategoryError::Database(e) => {
                error!("Category storage failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(ApiResponse::failed(message))).into_response()
    }
}
