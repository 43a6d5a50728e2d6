/// Terms screened when `BANNED_TERMS` is not configured.
pub const DEFAULT_TERMS: &[&str] = &["spam", "viagra", "casino"];

/// Case-insensitive substring screen applied to submitted content.
pub struct ContentPolicy {
    banned: Vec<String>,
}

impl ContentPolicy {
    pub fn new(terms: &[String]) -> Self {
        Self {
            banned: terms
                .iter()
                .map(|term| term.to_lowercase())
                .filter(|term| !term.is_empty())
                .collect(),
        }
    }

    /// Returns the first banned term found in `content`, if any.
    pub fn find_violation(&self, content: &str) -> Option<&str> {
        let lowered = content.to_lowercase();
        self.banned
            .iter()
            .find(|term| lowered.contains(term.as_str()))
            .map(|term| term.as_str())
    }
}
