#![cfg(feature = "ssr")]

use leptos_router::location::RequestUrl;

use super::*;
use crate::net::types::UserProfile;
use crate::state::auth::SessionLookup;

const LOADING: &str = "Loading...";
const REDIRECTING: &str = "Redirecting to sign in...";
const PAGE_CONTENT: &str = "page-header";
const SIGN_IN_CARD: &str = "Sign in to continue your recovery journal";
const SIGN_UP_CARD: &str = "Start a private space for your recovery";

fn render_at(path: &str, lookup: Option<SessionLookup>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new(path));
        let auth = SessionAuth::new();
        if let Some(lookup) = lookup {
            auth.resolve(lookup);
        }
        view! {
            <Router>
                <AppRoutes auth=auth/>
            </Router>
        }
        .to_html()
    })
}

fn signed_in() -> Option<SessionLookup> {
    Some(SessionLookup::Found(UserProfile {
        id: "user_1".to_owned(),
        full_name: Some("Sam Rivera".to_owned()),
        ..UserProfile::default()
    }))
}

// =============================================================
// Protected destinations
// =============================================================

#[test]
fn protected_destinations_show_placeholder_while_unresolved() {
    for destination in Destination::protected() {
        let html = render_at(destination.path(), None);
        assert!(html.contains(LOADING), "{destination:?}: {html}");
        assert!(!html.contains(PAGE_CONTENT), "{destination:?} leaked content: {html}");
    }
}

#[test]
fn protected_destinations_show_redirect_notice_when_signed_out() {
    for destination in Destination::protected() {
        let html = render_at(destination.path(), Some(SessionLookup::Missing));
        assert!(html.contains(REDIRECTING), "{destination:?}: {html}");
        assert!(!html.contains(PAGE_CONTENT), "{destination:?} leaked content: {html}");
    }
}

#[test]
fn protected_destinations_render_page_when_signed_in() {
    for destination in Destination::protected() {
        let html = render_at(destination.path(), signed_in());
        assert!(html.contains(PAGE_CONTENT), "{destination:?}: {html}");
        assert!(html.contains(destination.label()), "{destination:?}: {html}");
        assert!(!html.contains(LOADING), "{destination:?}: {html}");
    }
}

// =============================================================
// Entry points
// =============================================================

#[test]
fn sign_in_renders_without_a_session() {
    for status in [None, Some(SessionLookup::Missing)] {
        let html = render_at("/sign-in", status);
        assert!(html.contains(SIGN_IN_CARD), "{html}");
        assert!(!html.contains(LOADING));
    }
}

#[test]
fn sign_up_renders_without_a_session() {
    let html = render_at("/sign-up", None);
    assert!(html.contains(SIGN_UP_CARD), "{html}");
    assert!(!html.contains(LOADING));
}

#[test]
fn hosted_flow_subpaths_reach_entry_pages() {
    assert!(render_at("/sign-in/factor-one", None).contains(SIGN_IN_CARD));
    assert!(render_at("/sign-up/verify-email-address", None).contains(SIGN_UP_CARD));
}

#[test]
fn unknown_path_shows_not_found() {
    let html = render_at("/journal/42", None);
    assert!(html.contains("Page not found"), "{html}");
}
