// ============================================================================
// ANONYMOUS THOUGHT JOURNAL API
// ============================================================================

// - Thought submission with optional mood tag and visibility flag
// - Public feed with mood and scope filtering
// - Anonymous bearer-token sessions
// - Fixed-window rate limiting per client IP
// - Content denylist screening
// - Proper error handling
// - Structured logging

use std::net::SocketAddr;
use std::time::Duration;

use thoughts_api::{app, config::Config, ratelimit, states::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::load();

    // Create application state
    let state = AppState::new(&config);

    // Keep the bucket maps bounded under many distinct client IPs.
    ratelimit::spawn_sweeper(
        vec![state.create_limiter.clone(), state.list_limiter.clone()],
        Duration::from_secs(300),
    );

    let router = app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health        - Health check");
    info!("  POST   /auth/session  - Issue anonymous session token");
    info!("  POST   /thoughts      - Submit a thought (rate limited)");
    info!("  GET    /thoughts      - List thoughts (?mood=&scope=, rate limited)");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
