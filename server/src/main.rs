mod config;
mod identity;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if dotenvy::dotenv().is_ok() {
        tracing::debug!("loaded .env");
    }

    // Misconfiguration is fatal: refuse to start without identity credentials.
    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration, refusing to start");
            std::process::exit(1);
        }
    };

    let identity = match identity::http::HttpIdentityProvider::new(config.identity.clone()) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!(error = %e, "identity provider setup failed");
            std::process::exit(1);
        }
    };
    tracing::info!(api_url = %config.identity.api_url, "identity provider configured");

    let state = state::AppState::new(Arc::new(identity), &config.identity.session_cookie, &config.app_url);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router setup failed");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "recovery journal listening");
    axum::serve(listener, app).await.expect("server failed");
}
