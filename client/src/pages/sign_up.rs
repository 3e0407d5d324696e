//! Public sign-up entry point. Always renders, like sign-in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::HOSTED_SIGN_UP_PATH;
use crate::routes::Destination;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Start a private space for your recovery"</p>
                <a href=HOSTED_SIGN_UP_PATH rel="external" class="auth-button">
                    "Continue to sign up"
                </a>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href=Destination::SignIn.path()>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
