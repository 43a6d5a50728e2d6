use crate::errors::ApiError;
use axum::http::{HeaderMap, header};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (session identity ID)
    pub exp: usize,
}

/// Mints a 24h bearer token for an anonymous session identity.
pub fn create_token(identity_id: &Uuid, secret: &str) -> Result<String, ApiError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(24))
        .ok_or_else(|| ApiError::Internal("Failed to calculate expiration".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: identity_id.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("Token Creation failed: {}", e)))
}

/// Resolves the caller's identity from the `Authorization: Bearer` header.
///
/// Never fails: a missing, malformed, or expired token resolves to `None`.
/// The caller decides whether that means "anonymous" (submission) or
/// "unauthorized" (listing with `scope=me`).
pub fn resolve_identity(headers: &HeaderMap, secret: &str) -> Option<Uuid> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;

    // Check for "Bearer " prefix
    let token = auth_header.strip_prefix("Bearer ")?;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()?;

    Uuid::parse_str(&claims.sub).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &str = "test-secret";

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn token_round_trips_to_the_same_identity() {
        let identity_id = Uuid::new_v4();
        let token = create_token(&identity_id, SECRET).unwrap();
        assert_eq!(resolve_identity(&bearer(&token), SECRET), Some(identity_id));
    }

    #[test]
    fn garbage_token_resolves_to_none() {
        assert_eq!(resolve_identity(&bearer("not-a-token"), SECRET), None);
    }

    #[test]
    fn wrong_secret_resolves_to_none() {
        let token = create_token(&Uuid::new_v4(), SECRET).unwrap();
        assert_eq!(resolve_identity(&bearer(&token), "other-secret"), None);
    }

    #[test]
    fn missing_header_resolves_to_none() {
        assert_eq!(resolve_identity(&HeaderMap::new(), SECRET), None);
    }

    #[test]
    fn non_bearer_scheme_resolves_to_none() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(resolve_identity(&headers, SECRET), None);
    }
}
