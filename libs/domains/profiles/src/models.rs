use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile document.
///
/// The `id` is the authentication provider's user id, not a generated one,
/// so a signed-in user maps to exactly one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Avatar initials: first letters of first and last name, falling back
    /// to the first name alone, then the email, then a placeholder.
    pub fn initials(&self) -> String {
        match (first_char(&self.first_name), first_char(&self.last_name)) {
            (Some(f), Some(l)) => format!("{f}{l}").to_uppercase(),
            (Some(f), None) => f.to_uppercase().to_string(),
            _ => self
                .email
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string()),
        }
    }
}

fn first_char(value: &Option<String>) -> Option<char> {
    value.as_deref().and_then(|s| s.chars().next())
}
