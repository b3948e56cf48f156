use axum::{
    extract::Request,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::category::CategoryService;
use crate::config::Config;
use crate::recommender::Recommender;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub categories: Arc<CategoryService>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(config: Config, categories: CategoryService, recommender: Recommender) -> Self {
        Self {
            config: Arc::new(config),
            categories: Arc::new(categories),
            recommender: Arc::new(recommender),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let category_routes = Router::new()
        .route("/category/create", post(crate::category::create_category))
        .route("/category/", get(crate::category::get_all_categories))
        .route("/category", get(crate::category::get_all_categories))
        .route("/category/:name", get(crate::category::get_category));

    Router::new()
        .merge(category_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    // CORS preflight for paths without a route of their own
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
