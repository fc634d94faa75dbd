use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_origins.as_deref());

    let ollama = Router::new()
        .route("/status", get(handlers::status::get_status))
        .route("/models", get(handlers::models::list_models))
        .route("/models/pull", post(handlers::pull::pull_model))
        .route("/models/delete", delete(handlers::delete::delete_model))
        .route("/models/:model_name", get(handlers::model_info::get_model_info))
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest("/ollama", ollama)
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: Option<&str>) -> CorsLayer {
    match origins {
        Some(origins) => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
