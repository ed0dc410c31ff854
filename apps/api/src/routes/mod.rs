pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/match", post(handlers::handle_match))
        .route("/api/more-questions", post(handlers::handle_more_questions))
        .route("/api/evaluate", post(handlers::handle_evaluate))
        .with_state(state)
}
