//! HTTP adapter for the hosted identity provider.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use super::{IdentityError, IdentityProvider, UserProfile};
use crate::config::IdentityConfig;

const PUBLISHABLE_KEY_HEADER: &str = "X-Publishable-Key";

#[derive(Debug, Deserialize)]
struct EmailAddress {
    id: String,
    email_address: String,
}

/// User record as the provider's `/v1/me` endpoint returns it.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    primary_email_address_id: Option<String>,
    #[serde(default)]
    email_addresses: Vec<EmailAddress>,
}

impl From<ProviderUser> for UserProfile {
    fn from(user: ProviderUser) -> Self {
        let full_name = [user.first_name.as_deref(), user.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let primary_email = user.primary_email_address_id.as_deref().and_then(|primary| {
            user.email_addresses
                .iter()
                .find(|e| e.id == primary)
                .map(|e| e.email_address.clone())
        });
        Self {
            id: user.id,
            full_name: (!full_name.is_empty()).then_some(full_name),
            image_url: user.image_url.filter(|url| !url.is_empty()),
            primary_email,
        }
    }
}

/// Statuses meaning the session is absent, expired or revoked.
fn is_session_missing(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND)
}

/// Join a hosted page path onto the provider base, with an optional return URL.
fn hosted_url(api_url: &str, path: &str, return_to: Option<&str>) -> String {
    let base = format!("{api_url}{path}");
    match return_to {
        Some(target) => reqwest::Url::parse_with_params(&base, &[("redirect_url", target)])
            .map_or(base, |url| url.to_string()),
        None => base,
    }
}

pub struct HttpIdentityProvider {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl HttpIdentityProvider {
    /// Build the adapter with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::Client`] if the HTTP client cannot be built.
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| IdentityError::Client(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn current_user(&self, session: &str) -> Result<Option<UserProfile>, IdentityError> {
        let resp = self
            .http
            .get(self.endpoint("/v1/me"))
            .bearer_auth(session)
            .header(PUBLISHABLE_KEY_HEADER, &self.config.publishable_key)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        let status = resp.status();
        if is_session_missing(status) {
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(IdentityError::Upstream { status: status.as_u16(), body });
        }

        let user = resp
            .json::<ProviderUser>()
            .await
            .map_err(|e| IdentityError::Decode(e.to_string()))?;
        Ok(Some(user.into()))
    }

    async fn sign_out(&self, session: &str) -> Result<(), IdentityError> {
        let resp = self
            .http
            .post(self.endpoint("/v1/sessions/revoke"))
            .bearer_auth(session)
            .header(PUBLISHABLE_KEY_HEADER, &self.config.publishable_key)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        let status = resp.status();
        // Already gone counts as signed out.
        if status.is_success() || is_session_missing(status) {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(IdentityError::Upstream { status: status.as_u16(), body })
    }

    fn sign_in_url(&self, return_to: &str) -> String {
        hosted_url(&self.config.api_url, "/sign-in", Some(return_to))
    }

    fn sign_up_url(&self, return_to: &str) -> String {
        hosted_url(&self.config.api_url, "/sign-up", Some(return_to))
    }

    fn security_settings_url(&self) -> String {
        hosted_url(&self.config.api_url, "/user/security", None)
    }
}
