use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    view! {
        <div class="activities-page">
            <PageHeader title="Activities" description="Healthy routines and things to do today"/>
            <p class="empty-state">"No activities planned yet."</p>
        </div>
    }
}
