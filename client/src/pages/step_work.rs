use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[component]
pub fn StepWorkPage() -> impl IntoView {
    view! {
        <div class="step-work-page">
            <PageHeader title="Step Work" description="Work through each step with guided reflection"/>
            <ol class="step-work-page__steps">
                {(1..=12)
                    .map(|n| view! { <li class="step-work-page__step">{format!("Step {n}")}</li> })
                    .collect_view()}
            </ol>
        </div>
    }
}
