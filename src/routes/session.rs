use crate::{auth::create_token, dto::SessionResponse, errors::ApiError, states::AppState};
use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use uuid::Uuid;

/// POST /auth/session
///
/// Mints an anonymous session identity and its bearer token. The identity
/// only exists inside tokens; nothing is stored server-side.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let identity_id = Uuid::new_v4();
    let token = create_token(&identity_id, &state.jwt_secret)?;

    info!("Anonymous session issued: {}", identity_id);

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse { token, identity_id }),
    ))
}
