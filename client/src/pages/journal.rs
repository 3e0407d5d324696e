use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[component]
pub fn JournalPage() -> impl IntoView {
    view! {
        <div class="journal-page">
            <PageHeader title="Journal" description="Reflect on your journey and track your progress"/>
            <p class="empty-state">"No entries yet. Your first reflection starts here."</p>
        </div>
    }
}
