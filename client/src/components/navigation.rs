//! Top navigation bar linking the protected destinations.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::provider::{AccountActions, AuthStatusProvider, SessionAuth};
use crate::routes::Destination;
use crate::state::auth::AuthStatus;

#[component]
pub fn Navigation(auth: SessionAuth) -> impl IntoView {
    let signed_in = move || auth.status() == AuthStatus::Authenticated;
    let display_name = move || {
        auth.profile()
            .map(|p| p.display_name().to_owned())
            .unwrap_or_default()
    };

    view! {
        <nav class="nav">
            <A href=Destination::Dashboard.path() attr:class="nav__brand">
                "Recovery Journal"
            </A>
            <Show when=signed_in>
                <ul class="nav__links">
                    {Destination::protected()
                        .map(|d| {
                            view! {
                                <li>
                                    <A href=d.path() attr:class="nav__link">
                                        {d.label()}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <span class="nav__user">{display_name}</span>
            </Show>
        </nav>
    }
}
