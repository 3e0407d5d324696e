use std::sync::Arc;

use axum::http::header::{LOCATION, SET_COOKIE};

use super::*;
use crate::state::test_helpers::{MockIdentity, TEST_APP_URL, TEST_COOKIE, VALID_SESSION, test_app_state};

fn jar_with(token: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(TEST_COOKIE, token.to_owned()))
}

// =============================================================================
// identity_error_to_status
// =============================================================================

#[test]
fn identity_errors_map_to_bad_gateway() {
    assert_eq!(identity_error_to_status(&IdentityError::Request("x".into())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        identity_error_to_status(&IdentityError::Upstream { status: 503, body: String::new() }),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(identity_error_to_status(&IdentityError::Decode("x".into())), StatusCode::BAD_GATEWAY);
}

#[test]
fn client_setup_error_is_internal() {
    assert_eq!(
        identity_error_to_status(&IdentityError::Client("tls".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// session_token
// =============================================================================

#[test]
fn session_token_reads_named_cookie() {
    assert_eq!(session_token(&jar_with("abc"), TEST_COOKIE), Some("abc"));
}

#[test]
fn session_token_ignores_missing_and_empty() {
    assert_eq!(session_token(&CookieJar::new(), TEST_COOKIE), None);
    assert_eq!(session_token(&jar_with(""), TEST_COOKIE), None);
    assert_eq!(session_token(&jar_with("abc"), "other"), None);
}

// =============================================================================
// GET /api/auth/me
// =============================================================================

#[tokio::test]
async fn me_without_cookie_is_unauthorized() {
    let state = test_app_state(Arc::new(MockIdentity::new()));
    let resp = me(State(state), CookieJar::new()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_unknown_session_is_unauthorized() {
    let state = test_app_state(Arc::new(MockIdentity::new()));
    let resp = me(State(state), jar_with("sess_expired")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_valid_session_returns_profile() {
    let state = test_app_state(Arc::new(MockIdentity::new()));
    let resp = me(State(state), jar_with(VALID_SESSION)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn me_when_provider_fails_is_bad_gateway() {
    let state = test_app_state(Arc::new(MockIdentity::failing()));
    let resp = me(State(state), jar_with(VALID_SESSION)).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// POST /api/auth/logout
// =============================================================================

#[tokio::test]
async fn logout_revokes_and_clears_cookie() {
    let identity = Arc::new(MockIdentity::new());
    let state = test_app_state(identity.clone());
    let resp = logout(State(state), jar_with(VALID_SESSION)).await.into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(*identity.revoked.lock().unwrap(), vec![VALID_SESSION.to_owned()]);
    let set_cookie = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with(&format!("{TEST_COOKIE}=")), "{set_cookie}");
    assert!(set_cookie.contains("Max-Age=0"), "{set_cookie}");
}

#[tokio::test]
async fn logout_without_session_still_succeeds() {
    let identity = Arc::new(MockIdentity::new());
    let state = test_app_state(identity.clone());
    let resp = logout(State(state), CookieJar::new()).await.into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(identity.revoked.lock().unwrap().is_empty());
}

#[tokio::test]
async fn logout_clears_cookie_even_if_revocation_fails() {
    let state = test_app_state(Arc::new(MockIdentity::failing()));
    let resp = logout(State(state), jar_with(VALID_SESSION)).await.into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.headers().get(SET_COOKIE).is_some());
}

// =============================================================================
// Hosted-flow redirects
// =============================================================================

#[tokio::test]
async fn sign_in_redirect_targets_hosted_flow_with_return_url() {
    let state = test_app_state(Arc::new(MockIdentity::new()));
    let resp = sign_in_redirect(State(state)).await.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        &format!("https://identity.example.test/sign-in?redirect_url={TEST_APP_URL}")
    );
}

#[tokio::test]
async fn sign_up_redirect_targets_hosted_flow() {
    let state = test_app_state(Arc::new(MockIdentity::new()));
    let resp = sign_up_redirect(State(state)).await.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = resp.headers().get(LOCATION).unwrap().to_str().unwrap();
    assert!(location.starts_with("https://identity.example.test/sign-up"), "{location}");
}

#[tokio::test]
async fn security_redirect_targets_account_settings() {
    let state = test_app_state(Arc::new(MockIdentity::new()));
    let resp = security_redirect(State(state)).await.into_response();
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "https://identity.example.test/user/security");
}
