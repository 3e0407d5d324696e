//! Auth routes — session lookup, sign-out, hosted-flow redirects.
//!
//! The session itself lives with the identity provider. These handlers only
//! forward the provider's session cookie and translate its answers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

use crate::identity::IdentityError;
use crate::state::AppState;

/// Map provider failures to the status the browser sees.
pub(crate) fn identity_error_to_status(err: &IdentityError) -> StatusCode {
    match err {
        IdentityError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        IdentityError::Request(_) | IdentityError::Upstream { .. } | IdentityError::Decode(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

/// Non-empty session token from the provider's cookie.
fn session_token<'a>(jar: &'a CookieJar, cookie_name: &str) -> Option<&'a str> {
    jar.get(cookie_name)
        .map(Cookie::value)
        .filter(|token| !token.is_empty())
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me` — profile of the signed-in user, or 401.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(token) = session_token(&jar, &state.session_cookie) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    match state.identity.current_user(token).await {
        Ok(Some(profile)) => Json(profile).into_response(),
        Ok(None) => StatusCode::UNAUTHORIZED.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "session lookup failed");
            identity_error_to_status(&e).into_response()
        }
    }
}

/// `POST /api/auth/logout` — revoke at the provider, clear the cookie.
///
/// Always clears the local cookie; a failed revocation is logged only.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = session_token(&jar, &state.session_cookie) {
        if let Err(e) = state.identity.sign_out(token).await {
            tracing::warn!(error = %e, "session revocation failed");
        }
    }

    let cookie = Cookie::build((state.session_cookie.to_string(), ""))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .max_age(Duration::ZERO);

    (jar.add(cookie), StatusCode::NO_CONTENT)
}

/// `GET /auth/sign-in` — redirect to the hosted sign-in flow.
pub async fn sign_in_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.identity.sign_in_url(&state.app_url))
}

/// `GET /auth/sign-up` — redirect to the hosted sign-up flow.
pub async fn sign_up_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.identity.sign_up_url(&state.app_url))
}

/// `GET /auth/security` — redirect to the hosted account security settings.
pub async fn security_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&state.identity.security_settings_url())
}
