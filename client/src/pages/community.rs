use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <div class="community-page">
            <PageHeader title="Community" description="Share support and stay connected"/>
            <p class="empty-state">"Nothing posted yet."</p>
        </div>
    }
}
