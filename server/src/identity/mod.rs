//! Identity provider — the external collaborator that owns sessions.
//!
//! DESIGN
//! ======
//! Handlers only see the [`IdentityProvider`] trait so the HTTP adapter can be
//! swapped for a mock in tests. The provider's session protocol stays opaque:
//! the host forwards the session cookie value and reads back a profile.

pub mod http;

pub use client::net::types::UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The HTTP client could not be built.
    #[error("identity client setup failed: {0}")]
    Client(String),

    /// The request never produced a response (DNS, TLS, timeout).
    #[error("identity request failed: {0}")]
    Request(String),

    /// The provider answered with an unexpected status.
    #[error("identity provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The provider response did not match the expected schema.
    #[error("identity response decode failed: {0}")]
    Decode(String),
}

/// Provider-neutral async trait for session lookup and hosted flows.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the user behind `session`. `Ok(None)` means no valid session.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the provider cannot be reached or
    /// answers unexpectedly.
    async fn current_user(&self, session: &str) -> Result<Option<UserProfile>, IdentityError>;

    /// Revoke `session` at the provider.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if revocation fails.
    async fn sign_out(&self, session: &str) -> Result<(), IdentityError>;

    /// Hosted sign-in page that returns to `return_to` afterwards.
    fn sign_in_url(&self, return_to: &str) -> String;

    /// Hosted sign-up page that returns to `return_to` afterwards.
    fn sign_up_url(&self, return_to: &str) -> String;

    /// Hosted account security settings page.
    fn security_settings_url(&self) -> String;
}
