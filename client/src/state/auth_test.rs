use super::*;

fn alice() -> UserProfile {
    UserProfile {
        id: "user_alice".to_owned(),
        full_name: Some("Alice".to_owned()),
        image_url: None,
        primary_email: Some("alice@example.com".to_owned()),
    }
}

// =============================================================
// AuthStatus
// =============================================================

#[test]
fn auth_status_default_is_unresolved() {
    assert_eq!(AuthStatus::default(), AuthStatus::Unresolved);
}

#[test]
fn is_loaded_only_for_resolved_states() {
    assert!(!AuthStatus::Unresolved.is_loaded());
    assert!(AuthStatus::Authenticated.is_loaded());
    assert!(AuthStatus::Unauthenticated.is_loaded());
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn auth_state_default_is_unresolved_without_profile() {
    let state = AuthState::default();
    assert_eq!(state.status, AuthStatus::Unresolved);
    assert!(state.profile.is_none());
}

#[test]
fn resolve_found_authenticates_with_profile() {
    let mut state = AuthState::default();
    state.resolve(SessionLookup::Found(alice()));
    assert_eq!(state.status, AuthStatus::Authenticated);
    assert_eq!(state.profile, Some(alice()));
}

#[test]
fn resolve_missing_is_unauthenticated() {
    let mut state = AuthState::default();
    state.resolve(SessionLookup::Missing);
    assert_eq!(state.status, AuthStatus::Unauthenticated);
    assert!(state.profile.is_none());
}

#[test]
fn resolve_failure_collapses_to_unauthenticated() {
    let mut state = AuthState::default();
    state.resolve(SessionLookup::Failed("network down".to_owned()));
    assert_eq!(state.status, AuthStatus::Unauthenticated);
}

#[test]
fn signed_out_clears_authenticated_session() {
    let mut state = AuthState::default();
    state.resolve(SessionLookup::Found(alice()));
    state.signed_out();
    assert_eq!(state.status, AuthStatus::Unauthenticated);
    assert!(state.profile.is_none());
}

#[test]
fn status_can_flip_back_to_authenticated() {
    let mut state = AuthState::default();
    state.resolve(SessionLookup::Found(alice()));
    state.signed_out();
    state.resolve(SessionLookup::Found(alice()));
    assert_eq!(state.status, AuthStatus::Authenticated);
}

// =============================================================
// SessionLookup from api results
// =============================================================

#[test]
fn lookup_from_api_result() {
    assert_eq!(SessionLookup::from(Ok(Some(alice()))), SessionLookup::Found(alice()));
    assert_eq!(SessionLookup::from(Ok(None)), SessionLookup::Missing);
    assert_eq!(
        SessionLookup::from(Err("boom".to_owned())),
        SessionLookup::Failed("boom".to_owned())
    );
}
