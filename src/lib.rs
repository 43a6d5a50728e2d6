pub mod auth;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod moderation;
pub mod ratelimit;
pub mod routes;
pub mod states;
pub mod store;

use axum::{
    Router,
    routing::{get, post},
};
use states::AppState;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Builds the full application router over the given state.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let request_timeout = state.request_timeout;

    Router::new()
        // Public routes (no auth required)
        .route("/health", get(routes::health::health_check))
        .route("/auth/session", post(routes::session::create_session))
        // Thought feed (auth optional; scope=me needs a bearer token)
        .route(
            "/thoughts",
            post(routes::thoughts::create_thought).get(routes::thoughts::list_thoughts),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
