//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the auth collaborator (`auth::provider`). Route guards and
//! profile-aware components only observe it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Tri-state session validity signal.
///
/// Starts `Unresolved` and is driven exclusively by the auth collaborator.
/// There is no terminal state: sign-out or expiry moves an `Authenticated`
/// session back to `Unauthenticated`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Session lookup still in flight.
    #[default]
    Unresolved,
    /// A valid session is present.
    Authenticated,
    /// No valid session.
    Unauthenticated,
}

impl AuthStatus {
    /// Whether the collaborator has finished resolving the session.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// Outcome of one session lookup against the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionLookup {
    Found(UserProfile),
    Missing,
    /// The lookup itself failed (network, upstream error).
    Failed(String),
}

impl From<Result<Option<UserProfile>, String>> for SessionLookup {
    fn from(result: Result<Option<UserProfile>, String>) -> Self {
        match result {
            Ok(Some(profile)) => Self::Found(profile),
            Ok(None) => Self::Missing,
            Err(reason) => Self::Failed(reason),
        }
    }
}

/// Current session status plus the signed-in user's profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub profile: Option<UserProfile>,
}

impl AuthState {
    /// Apply a session lookup outcome.
    ///
    /// A failed lookup is indistinguishable from "no session" for routing:
    /// both leave the user `Unauthenticated`.
    pub fn resolve(&mut self, lookup: SessionLookup) {
        match lookup {
            SessionLookup::Found(profile) => {
                self.status = AuthStatus::Authenticated;
                self.profile = Some(profile);
            }
            SessionLookup::Missing | SessionLookup::Failed(_) => self.signed_out(),
        }
    }

    /// Drop the session after sign-out or expiry.
    pub fn signed_out(&mut self) {
        self.status = AuthStatus::Unauthenticated;
        self.profile = None;
    }
}
