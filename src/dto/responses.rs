use serde::Serialize;
use uuid::Uuid;

/// Issued by POST /auth/session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub identity_id: Uuid,
}
