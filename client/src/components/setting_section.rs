use leptos::prelude::*;

/// One row of the settings panel.
///
/// Renders `children` as the trailing action, or a chevron when the row is a
/// plain link-style entry.
#[component]
pub fn SettingSection(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let action = match children {
        Some(children) => children().into_any(),
        None => view! { <span class="setting-section__chevron" aria-hidden="true">"›"</span> }.into_any(),
    };

    view! {
        <div
            class="setting-section"
            class:setting-section--clickable=on_click.is_some()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="setting-section__text">
                <h3 class="setting-section__title">{title}</h3>
                <p class="setting-section__description">{description}</p>
            </div>
            {action}
        </div>
    }
}
