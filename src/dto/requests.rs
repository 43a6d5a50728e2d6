use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::{Mood, Scope};

#[derive(Debug, Validate, Deserialize)]
pub struct CreateThoughtRequest {
    /// Defaults to "" when absent so a missing field surfaces as the same
    /// validation error as an empty one.
    #[serde(default)]
    #[validate(length(max = 2000, message = "Thought content must be at most 2000 characters"))]
    #[validate(custom(function = not_blank))]
    pub content: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub mood: Option<Mood>,
}

fn not_blank(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::new("not_blank")
            .with_message("Thought content cannot be empty.".into()));
    }
    Ok(())
}

/// Query parameters for GET /thoughts.
///
/// `mood` stays a raw string here: unrecognized values must degrade to
/// "no filter" instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct ListThoughtsQuery {
    pub mood: Option<String>,
    #[serde(default)]
    pub scope: Scope,
}
