//! REST API helpers for the host's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting "not available" since session state is
//! only resolved in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so an unreachable auth
//! endpoint degrades to the signed-out experience without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::UserProfile;

/// Current-session lookup endpoint.
pub const ME_ENDPOINT: &str = "/api/auth/me";
/// Session revocation endpoint.
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
/// Host route that redirects into the provider's hosted sign-in flow.
pub const HOSTED_SIGN_IN_PATH: &str = "/auth/sign-in";
/// Host route that redirects into the provider's hosted sign-up flow.
pub const HOSTED_SIGN_UP_PATH: &str = "/auth/sign-up";
/// Host route that redirects to the provider's account security settings.
pub const SECURITY_SETTINGS_PATH: &str = "/auth/security";

/// Statuses that mean "no valid session" rather than a failed lookup.
#[cfg(any(test, feature = "hydrate"))]
fn is_session_missing(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(any(test, feature = "hydrate"))]
fn me_failed_message(status: u16) -> String {
    format!("session lookup failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("sign out failed: {status}")
}

/// Fetch the signed-in user's profile from `/api/auth/me`.
///
/// Returns `Ok(None)` when the host reports no session.
///
/// # Errors
///
/// Returns an error string if the request fails or the host answers with an
/// unexpected status.
pub async fn fetch_current_user() -> Result<Option<UserProfile>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ME_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if is_session_missing(resp.status()) {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(me_failed_message(resp.status()));
        }
        let profile = resp.json::<UserProfile>().await.map_err(|e| e.to_string())?;
        Ok(Some(profile))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// End the current session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the request fails or the host rejects it.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(logout_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
