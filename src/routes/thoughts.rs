use crate::{
    auth::resolve_identity,
    dto::{CreateThoughtRequest, ListThoughtsQuery},
    errors::ApiError,
    models::{MoodFilter, Scope, Thought},
    routes::client_key,
    states::AppState,
    store::{ScopeFilter, ThoughtFilter},
};
use axum::{
    Json,
    extract::{ConnectInfo, Query, State},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use std::net::SocketAddr;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// POST /thoughts
/// Headers: Authorization: Bearer <token> (optional)
/// Body: { "content": "...", "is_public": bool, "mood": "Calm" | null }
pub async fn create_thought(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<CreateThoughtRequest>,
) -> Result<(StatusCode, Json<Thought>), ApiError> {
    let client = client_key(&headers, addr);
    if !state.create_limiter.check(&client) {
        warn!("Submission rate limit hit for {}", client);
        return Err(ApiError::RateLimited);
    }

    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    if let Some(term) = state.policy.find_violation(&payload.content) {
        warn!("Content policy violation ({}) from {}", term, client);
        return Err(ApiError::ContentPolicy(
            "Thought content violates the content policy.".to_string(),
        ));
    }

    // A missing or invalid credential degrades to anonymous attribution.
    let author_id = resolve_identity(&headers, &state.jwt_secret);

    let thought = Thought {
        id: Uuid::new_v4(),
        author_id,
        content: payload.content,
        is_public: payload.is_public,
        mood: payload.mood,
        created_at: Utc::now(),
    };

    let created = state
        .store
        .insert(thought)
        .await
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    info!(
        "Thought created: {} ({})",
        created.id,
        if created.author_id.is_some() {
            "attributed"
        } else {
            "anonymous"
        }
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /thoughts?mood=<value>&scope=<all|me>
/// Headers: Authorization: Bearer <token> (required for scope=me)
pub async fn list_thoughts(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(params): Query<ListThoughtsQuery>,
) -> Result<Json<Vec<Thought>>, ApiError> {
    let client = client_key(&headers, addr);
    if !state.list_limiter.check(&client) {
        warn!("Listing rate limit hit for {}", client);
        return Err(ApiError::RateLimited);
    }

    let scope = match params.scope {
        Scope::All => ScopeFilter::Public,
        Scope::Me => {
            let identity_id =
                resolve_identity(&headers, &state.jwt_secret).ok_or(ApiError::Unauthorized)?;
            ScopeFilter::Author(identity_id)
        }
    };

    let filter = ThoughtFilter {
        scope,
        mood: MoodFilter::from_query(params.mood.as_deref()),
    };

    let thoughts = state
        .store
        .list(filter)
        .await
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    Ok(Json(thoughts))
}
