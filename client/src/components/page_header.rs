use leptos::prelude::*;

/// Title and one-line description at the top of every page.
#[component]
pub fn PageHeader(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <p class="page-header__description">{description}</p>
        </header>
    }
}
