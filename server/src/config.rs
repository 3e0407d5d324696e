//! Startup configuration parsed from environment variables.
//!
//! A missing identity credential is fatal: the server refuses to start rather
//! than serve pages that can never resolve a session.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_COOKIE: &str = "__session";
pub const DEFAULT_IDENTITY_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("missing required config: env var {var} not set")]
    Missing { var: &'static str },

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Connection settings for the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Publishable application key sent with every provider request.
    pub publishable_key: String,
    /// Provider API base URL without trailing slash.
    pub api_url: String,
    /// Name of the cookie carrying the provider session token.
    pub session_cookie: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Public base URL hosted flows return to after sign-in or sign-up.
    pub app_url: String,
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `IDENTITY_PUBLISHABLE_KEY`
    /// - `IDENTITY_API_URL`
    ///
    /// Optional:
    /// - `IDENTITY_SESSION_COOKIE`: default `__session`
    /// - `IDENTITY_TIMEOUT_SECS`: default 10
    /// - `PORT`: default 3000
    /// - `APP_URL`: default `http://localhost:{PORT}`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let publishable_key = required("IDENTITY_PUBLISHABLE_KEY")?;
        let api_url = required("IDENTITY_API_URL")?.trim_end_matches('/').to_owned();
        let session_cookie = optional("IDENTITY_SESSION_COOKIE").unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_owned());
        let timeout_secs = parse_or("IDENTITY_TIMEOUT_SECS", DEFAULT_IDENTITY_TIMEOUT_SECS)?;
        let port = parse_or("PORT", DEFAULT_PORT)?;
        let app_url = optional("APP_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_owned();

        Ok(Self { port, app_url, identity: IdentityConfig { publishable_key, api_url, session_cookie, timeout_secs } })
    }
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    optional(var).ok_or(ConfigError::Missing { var })
}

fn parse_or<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(var) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
