//! Authenticated landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::provider::{AccountActions, SessionAuth};
use crate::components::page_header::PageHeader;
use crate::routes::Destination;

const SHORTCUTS: [(Destination, &str); 4] = [
    (Destination::Journal, "Write about today and look back on past entries."),
    (Destination::StepWork, "Work through the steps at your own pace."),
    (Destination::Activities, "Plan healthy activities and track what helps."),
    (Destination::Community, "Connect with others on the same path."),
];

#[component]
pub fn DashboardPage(auth: SessionAuth) -> impl IntoView {
    let greeting = move || {
        auth.profile()
            .map_or_else(|| "Welcome back".to_owned(), |p| format!("Welcome back, {}", p.display_name()))
    };

    view! {
        <div class="dashboard-page">
            <PageHeader title="Dashboard" description="Your recovery at a glance"/>
            <p class="dashboard-page__greeting">{greeting}</p>
            <div class="dashboard-page__cards">
                {SHORTCUTS
                    .into_iter()
                    .map(|(destination, blurb)| {
                        view! {
                            <A href=destination.path() attr:class="dashboard-card">
                                <h2 class="dashboard-card__title">{destination.label()}</h2>
                                <p class="dashboard-card__blurb">{blurb}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
