use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::db::Category;
use crate::server::AppState;
use super::types::*;

pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), CategoryError> {
    let Json(req) = payload.map_err(|e| CategoryError::Invalid(e.body_text()))?;
    let category = req.validate()?;

    state.categories.register(category).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(MSG_CREATED))))
}

pub async fn get_all_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, CategoryError> {
    let body = state.categories.list_categories().await?;
    Ok(Json(body))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, CategoryError> {
    let response = match state.categories.read_category(&name).await? {
        Some(category) => Json(category).into_response(),
        None => (StatusCode::NOT_FOUND, Json(ApiResponse::failed(MSG_NOT_FOUND))).into_response(),
    };
    Ok(response)
}
