use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, repository::UserRepository};

/// Create the main application router with all API endpoints
pub fn create_router(repo: Arc<dyn UserRepository>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Accounts
        .route("/api/signup", post(handlers::signup))
        .route("/api/login", post(handlers::login))
        // Onboarding
        .route(
            "/api/onboarding",
            get(handlers::get_onboarding).post(handlers::submit_onboarding),
        )
        // Metrics and simulation
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/simulate", post(handlers::simulate))
        .route("/api/insights", get(handlers::get_insights))
        .route("/api/planner", post(handlers::planner_chat))
        // Shared state
        .with_state(repo)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
