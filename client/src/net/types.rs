//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server forwards identity-provider profile fields unchanged, so these
//! types mirror `/api/auth/me` exactly and keep display fallbacks here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Generated avatar service used when the provider has no profile image.
const AVATAR_FALLBACK_BASE: &str = "https://ui-avatars.com/api/";

/// Profile of the signed-in user as returned by `/api/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Provider-assigned user identifier.
    pub id: String,
    /// Full display name, if the user set one.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Hosted avatar image URL, if any.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Primary contact email address, if any.
    #[serde(default)]
    pub primary_email: Option<String>,
}

impl UserProfile {
    /// Name shown in the settings header and navigation.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("User")
    }

    /// Avatar URL, falling back to a generated initials image.
    #[must_use]
    pub fn avatar_url(&self) -> String {
        match self.image_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => url.to_owned(),
            None => match serde_urlencoded::to_string([("name", self.display_name())]) {
                Ok(query) => format!("{AVATAR_FALLBACK_BASE}?{query}"),
                Err(_) => AVATAR_FALLBACK_BASE.to_owned(),
            },
        }
    }
}
