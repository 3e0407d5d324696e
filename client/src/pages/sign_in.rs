//! Public sign-in entry point.
//!
//! Always renders, whatever the session status. The form itself is hosted by
//! the identity provider; `rel="external"` keeps the router from intercepting
//! the full-page hop into it.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::HOSTED_SIGN_IN_PATH;
use crate::routes::Destination;

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue your recovery journal"</p>
                <a href=HOSTED_SIGN_IN_PATH rel="external" class="auth-button">
                    "Continue to sign in"
                </a>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href=Destination::SignUp.path()>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
