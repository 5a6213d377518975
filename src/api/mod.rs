pub mod bfhl;
pub mod error;
pub mod info;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Root metadata
        .route("/", get(info::api_info).fallback(info::not_found))
        // Classification + health check
        .route(
            "/bfhl",
            post(bfhl::process_data)
                .get(bfhl::health_check)
                .fallback(info::not_found),
        )
        .fallback(info::not_found)
        .with_state(state)
}
