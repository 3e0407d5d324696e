use leptos::prelude::*;

/// Accessible checkbox styled as a switch.
#[component]
pub fn ToggleSwitch(
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle-switch" on:click=move |ev| ev.stop_propagation()>
            <input
                type="checkbox"
                class="toggle-switch__input"
                aria-label=label
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class="toggle-switch__track"></span>
        </label>
    }
}
