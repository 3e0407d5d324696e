//! Account and application settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Account actions (security settings, sign-out) are delegated to the auth
//! collaborator. Signing out flips the session to `Unauthenticated`, and the
//! surrounding route guard then redirects to sign-in.

use leptos::prelude::*;

use crate::auth::provider::{AccountActions, SessionAuth};
use crate::components::page_header::PageHeader;
use crate::components::setting_section::SettingSection;
use crate::components::toggle_switch::ToggleSwitch;
use crate::state::preferences::Preferences;
use crate::util::dark_mode;

#[component]
pub fn SettingsPage(auth: SessionAuth) -> impl IntoView {
    let prefs = RwSignal::new(Preferences::load());

    let profile = move || auth.profile().unwrap_or_default();
    let name = move || profile().display_name().to_owned();
    let avatar = move || profile().avatar_url();
    let email = move || profile().primary_email.unwrap_or_default();

    let on_security = Callback::new(move |()| auth.open_security_settings());

    let notifications = Signal::derive(move || prefs.with(|p| p.notifications));
    let on_notifications = Callback::new(move |enabled: bool| {
        prefs.update(|p| p.notifications = enabled);
        prefs.with_untracked(Preferences::save);
    });

    let dark = Signal::derive(move || prefs.with(|p| p.dark_mode_or(dark_mode::system_prefers_dark())));
    let on_dark = Callback::new(move |enabled: bool| {
        prefs.update(|p| p.dark_mode = Some(enabled));
        prefs.with_untracked(Preferences::save);
        dark_mode::apply(enabled);
    });

    let on_sign_out = move |_| auth.sign_out();

    view! {
        <div class="settings-page">
            <PageHeader
                title="Settings"
                description="Manage your account preferences and application settings"
            />

            <section class="settings-card">
                <div class="settings-card__profile">
                    <img class="settings-card__avatar" src=avatar alt="Profile"/>
                    <div>
                        <h2 class="settings-card__name">{name}</h2>
                        <p class="settings-card__email">{email}</p>
                    </div>
                </div>

                <div class="settings-card__sections">
                    <SettingSection
                        title="Privacy & Security"
                        description="Manage your password and security preferences"
                        on_click=on_security
                    />
                    <SettingSection
                        title="Notifications"
                        description="Choose what updates you want to receive"
                    >
                        <ToggleSwitch
                            label="Notifications"
                            checked=notifications
                            on_toggle=on_notifications
                        />
                    </SettingSection>
                    <SettingSection title="Dark Mode" description="Toggle dark mode appearance">
                        <ToggleSwitch label="Dark mode" checked=dark on_toggle=on_dark/>
                    </SettingSection>
                    <SettingSection title="Language" description="Change your preferred language"/>
                    <SettingSection title="Help & Support" description="Get help or contact support"/>
                </div>
            </section>

            <div class="settings-page__sign-out">
                <button class="btn btn--danger" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}
