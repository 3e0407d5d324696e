//! Route wrapper that applies the auth guard to a protected page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::{Decision, decide, install_route_guard};
use crate::auth::provider::AuthStatusProvider;

/// Renders `children` only for an authenticated session.
///
/// Shows [`LoadingPlaceholder`] while the session resolves and redirects to
/// sign-in once it resolves signed out. Unmounting cancels the guard so a late
/// resolution fires nothing.
#[component]
pub fn ProtectedRoute<P>(auth: P, children: ChildrenFn) -> impl IntoView
where
    P: AuthStatusProvider + Send + Sync,
{
    let navigate = use_navigate();
    let subscription = install_route_guard(&auth, move |path: &str| {
        navigate(path, NavigateOptions::default());
    });
    on_cleanup(move || subscription.cancel());

    move || match decide(auth.status()) {
        Decision::Loading => view! { <LoadingPlaceholder/> }.into_any(),
        Decision::Redirect(_) => view! {
            <div class="route-status">
                <p>"Redirecting to sign in..."</p>
            </div>
        }
        .into_any(),
        Decision::Render => children().into_any(),
    }
}

/// Neutral placeholder shown while the session lookup is in flight.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="route-status" role="status" aria-live="polite">
            <p>"Loading..."</p>
        </div>
    }
}
