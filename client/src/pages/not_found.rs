use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Destination;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <A href=Destination::Dashboard.path()>"Back to dashboard"</A>
        </div>
    }
}
