//! Route authorization for protected destinations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same three-way dispatch on
//! [`AuthStatus`]: wait while unresolved, redirect to sign-in when signed out,
//! render otherwise. The guard never times out; a hung session lookup keeps
//! the loading placeholder on screen.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::auth::provider::{AuthStatusProvider, Subscription};
use crate::routes::Destination;
use crate::state::auth::AuthStatus;

/// What a protected route shows for a given status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Neutral loading placeholder; no content, no redirect.
    Loading,
    /// Navigate to the given path; no content.
    Redirect(&'static str),
    /// Render the wrapped view unchanged.
    Render,
}

/// Map a session status to a route decision.
#[must_use]
pub fn decide(status: AuthStatus) -> Decision {
    match status {
        AuthStatus::Unresolved => Decision::Loading,
        AuthStatus::Unauthenticated => Decision::Redirect(Destination::SignIn.path()),
        AuthStatus::Authenticated => Decision::Render,
    }
}

/// Client-side navigation seam. The router owns history manipulation.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path);
    }
}

/// Evaluates statuses for one protected view and fires redirects.
pub struct RouteGuard<N> {
    navigator: N,
}

impl<N: Navigator> RouteGuard<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Decide for `status`, requesting the redirect when one is due.
    ///
    /// Re-evaluating an unchanged status repeats the same decision and the
    /// same redirect target.
    pub fn evaluate(&self, status: AuthStatus) -> Decision {
        let decision = decide(status);
        if let Decision::Redirect(path) = decision {
            self.navigator.navigate(path);
        }
        decision
    }
}

/// Drive a [`RouteGuard`] from `provider` until the subscription is cancelled.
///
/// Cancel the returned subscription when the protected view unmounts; a
/// status that resolves afterwards fires nothing.
pub fn install_route_guard<P, N>(provider: &P, navigator: N) -> Subscription
where
    P: AuthStatusProvider,
    N: Navigator + 'static,
{
    let guard = RouteGuard::new(navigator);
    provider.subscribe(move |status| {
        guard.evaluate(status);
    })
}
