//! Auth collaborator capability.
//!
//! DESIGN
//! ======
//! Components receive an [`AuthStatusProvider`] value as a prop instead of
//! reaching for ambient context, so guards can be driven by a fake in tests.
//! [`SessionAuth`] is the browser implementation: a signal resolved from the
//! host's `/api/auth/me` endpoint.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::state::auth::{AuthState, AuthStatus, SessionLookup};

/// How often a resolved session is re-checked for expiry.
#[cfg(feature = "hydrate")]
const SESSION_RECHECK: std::time::Duration = std::time::Duration::from_secs(60);

/// Read access to the current session status.
pub trait AuthStatusProvider: Clone + 'static {
    /// Current status. Tracked when read inside a reactive scope.
    fn status(&self) -> AuthStatus;

    /// Invoke `listener` with the current status and again on every change
    /// until the returned subscription is cancelled.
    fn subscribe(&self, listener: impl Fn(AuthStatus) + 'static) -> Subscription;
}

/// Account operations delegated to the identity provider.
pub trait AccountActions {
    /// Profile of the signed-in user, if any.
    fn profile(&self) -> Option<UserProfile>;

    /// End the session. The status becomes `Unauthenticated` once done.
    fn sign_out(&self);

    /// Open the provider's account security settings.
    fn open_security_settings(&self);
}

/// Handle to a status subscription.
///
/// Clones share the same liveness flag, so any clone can cancel delivery.
#[derive(Clone, Debug)]
pub struct Subscription {
    active: Arc<AtomicBool>,
}

impl Subscription {
    #[must_use]
    pub fn new() -> Self {
        Self { active: Arc::new(AtomicBool::new(true)) }
    }

    /// Stop delivering status changes. Idempotent.
    pub fn cancel(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards statuses to one listener while its subscription is live.
///
/// A status equal to the last one delivered is dropped, so profile-only
/// updates do not re-run the listener.
struct StatusRelay<F> {
    live: Subscription,
    last: Cell<Option<AuthStatus>>,
    listener: F,
}

impl<F: Fn(AuthStatus)> StatusRelay<F> {
    fn new(live: Subscription, listener: F) -> Self {
        Self { live, last: Cell::new(None), listener }
    }

    fn push(&self, status: AuthStatus) {
        if !self.live.is_active() || self.last.get() == Some(status) {
            return;
        }
        self.last.set(Some(status));
        (self.listener)(status);
    }
}

/// Signal-backed session state resolved from the host.
#[derive(Clone, Copy, Debug)]
pub struct SessionAuth {
    state: RwSignal<AuthState>,
}

impl SessionAuth {
    /// A new, `Unresolved` session.
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Snapshot of the full state without tracking.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Apply a session lookup outcome.
    pub fn resolve(&self, lookup: SessionLookup) {
        if let SessionLookup::Failed(reason) = &lookup {
            #[cfg(feature = "hydrate")]
            log::warn!("session lookup failed, treating as signed out: {reason}");
            #[cfg(not(feature = "hydrate"))]
            let _ = reason;
        }
        self.state.update(|s| s.resolve(lookup));
    }

    /// Mark the session as ended locally.
    pub fn mark_signed_out(&self) {
        self.state.update(AuthState::signed_out);
    }

    /// Fetch the current session from the host and apply it.
    pub async fn refresh(self) {
        let lookup = SessionLookup::from(crate::net::api::fetch_current_user().await);
        self.resolve(lookup);
    }
}

impl Default for SessionAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStatusProvider for SessionAuth {
    fn status(&self) -> AuthStatus {
        self.state.with(|s| s.status)
    }

    fn subscribe(&self, listener: impl Fn(AuthStatus) + 'static) -> Subscription {
        let subscription = Subscription::new();
        let relay = StatusRelay::new(subscription.clone(), listener);
        let state = self.state;
        Effect::new(move || relay.push(state.with(|s| s.status)));
        subscription
    }
}

impl AccountActions for SessionAuth {
    fn profile(&self) -> Option<UserProfile> {
        self.state.with(|s| s.profile.clone())
    }

    fn sign_out(&self) {
        #[cfg(feature = "hydrate")]
        {
            let auth = *self;
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::sign_out().await {
                    log::warn!("sign out request failed: {e}");
                }
                auth.mark_signed_out();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        self.mark_signed_out();
    }

    fn open_security_settings(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .location()
                    .set_href(crate::net::api::SECURITY_SETTINGS_PATH);
            }
        }
    }
}

/// Resolve the session now and keep re-checking it while the app is mounted.
///
/// No-op during server rendering, which always sees `Unresolved`.
pub fn install_session_watch(auth: SessionAuth) {
    #[cfg(feature = "hydrate")]
    {
        let alive = Subscription::new();
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            auth.refresh().await;
            loop {
                gloo_timers::future::sleep(SESSION_RECHECK).await;
                if !alive_task.is_active() {
                    break;
                }
                if auth.snapshot().status != AuthStatus::Authenticated {
                    continue;
                }
                auth.refresh().await;
            }
        });
        on_cleanup(move || alive.cancel());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
