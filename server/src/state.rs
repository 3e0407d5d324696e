//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no durable state of its own; it carries the identity provider
//! handle and the name of the session cookie that provider sets.

use std::sync::Arc;

use crate::identity::IdentityProvider;

/// Clone is required by Axum; the provider is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub session_cookie: Arc<str>,
    /// Public app URL hosted flows return to.
    pub app_url: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityProvider>, session_cookie: &str, app_url: &str) -> Self {
        Self { identity, session_cookie: Arc::from(session_cookie), app_url: Arc::from(app_url) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
