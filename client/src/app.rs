//! Root application component with routing.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::children::ToChildren;
use leptos::prelude::*;
use leptos::tachys::view::iterators::StaticVec;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NestedRoute, StaticSegment, WildcardSegment,
    any_nested_route::{AnyNestedRoute, IntoAnyNestedRoute},
    components::{RouteChildren, Router, Routes, RoutesProps},
};

use crate::auth::provider::{SessionAuth, install_session_watch};
use crate::components::{navigation::Navigation, protected_route::ProtectedRoute, quote_bar::QuoteBar};
use crate::pages::{
    activities::ActivitiesPage, community::CommunityPage, dashboard::DashboardPage, journal::JournalPage,
    not_found::NotFoundPage, settings::SettingsPage, sign_in::SignInPage, sign_up::SignUpPage,
    step_work::StepWorkPage,
};
use crate::routes::Destination;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session handle and passes it explicitly to every component that
/// reads auth state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = SessionAuth::new();
    install_session_watch(auth);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::preferences::Preferences;
        use crate::util::dark_mode;
        let prefs = Preferences::load();
        dark_mode::apply(prefs.dark_mode_or(dark_mode::system_prefers_dark()));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/recovery-journal.css"/>
        <Title text="Recovery Journal"/>

        <Router>
            <div class="app">
                <Navigation auth=auth/>
                <main class="app__main">
                    <AppRoutes auth=auth/>
                </main>
                <QuoteBar/>
            </div>
        </Router>
    }
}

/// One route per [`Destination`]; unknown paths show [`NotFoundPage`].
#[component]
pub fn AppRoutes(auth: SessionAuth) -> impl IntoView {
    let routes = StaticVec::from(route_table(auth));
    Routes(
        RoutesProps::builder()
            .fallback(|| view! { <NotFoundPage/> })
            .children(RouteChildren::to_children(move || routes))
            .build(),
    )
}

fn route_table(auth: SessionAuth) -> Vec<AnyNestedRoute> {
    Destination::ALL
        .into_iter()
        .map(move |destination| {
            let segment = StaticSegment(destination.segment());
            let view = move || destination_view(destination, auth);
            if destination.owns_subpaths() {
                NestedRoute::new((segment, WildcardSegment("rest")), view).into_any_nested_route()
            } else {
                NestedRoute::new(segment, view).into_any_nested_route()
            }
        })
        .collect()
}

/// The page for `destination`, behind [`ProtectedRoute`] when it is protected.
fn destination_view(destination: Destination, auth: SessionAuth) -> AnyView {
    if destination.is_protected() {
        view! {
            <ProtectedRoute auth=auth>
                {destination_page(destination, auth)}
            </ProtectedRoute>
        }
        .into_any()
    } else {
        destination_page(destination, auth)
    }
}

fn destination_page(destination: Destination, auth: SessionAuth) -> AnyView {
    match destination {
        Destination::Dashboard => view! { <DashboardPage auth=auth/> }.into_any(),
        Destination::Journal => view! { <JournalPage/> }.into_any(),
        Destination::Activities => view! { <ActivitiesPage/> }.into_any(),
        Destination::Community => view! { <CommunityPage/> }.into_any(),
        Destination::Settings => view! { <SettingsPage auth=auth/> }.into_any(),
        Destination::StepWork => view! { <StepWorkPage/> }.into_any(),
        Destination::SignIn => view! { <SignInPage/> }.into_any(),
        Destination::SignUp => view! { <SignUpPage/> }.into_any(),
    }
}
