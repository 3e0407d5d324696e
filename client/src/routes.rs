//! Client route table.
//!
//! DESIGN
//! ======
//! Every destination the router knows about is listed here once, so the route
//! guard, navigation chrome and tests agree on which paths are protected.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A client-side route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Dashboard,
    Journal,
    Activities,
    Community,
    Settings,
    StepWork,
    SignIn,
    SignUp,
}

impl Destination {
    /// All destinations in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::Journal,
        Self::Activities,
        Self::Community,
        Self::Settings,
        Self::StepWork,
        Self::SignIn,
        Self::SignUp,
    ];

    /// Router path, always absolute.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Journal => "/journal",
            Self::Activities => "/activities",
            Self::Community => "/community",
            Self::Settings => "/settings",
            Self::StepWork => "/stepwork",
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
        }
    }

    /// Path segment as registered with the router (no leading `/`).
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Label shown in navigation chrome.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Journal => "Journal",
            Self::Activities => "Activities",
            Self::Community => "Community",
            Self::Settings => "Settings",
            Self::StepWork => "Step Work",
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    /// Whether the destination requires an authenticated session.
    ///
    /// The sign-in and sign-up entry points always render.
    #[must_use]
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::SignIn | Self::SignUp)
    }

    /// Protected destinations in navigation order.
    pub fn protected() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|d| d.is_protected())
    }

    /// Whether sub-paths route to the same page.
    ///
    /// The hosted sign-in and sign-up flows continue on paths such as
    /// `/sign-in/factor-one`.
    #[must_use]
    pub fn owns_subpaths(self) -> bool {
        !self.is_protected()
    }
}
