use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use halos_api::auth::TokenVerifier;
use halos_api::{app, config, database, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and the
    // identity provider settings.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::config().context("loading configuration")?;

    let pool = database::connect(&config.database)
        .await
        .context("connecting to the database")?;
    database::migrate(&pool).await.context("running migrations")?;
    tracing::info!("database ready");

    let verifier = TokenVerifier::new(
        &config.auth.domain,
        &config.auth.audience,
        Duration::from_secs(config.auth.jwks_cache_ttl_secs),
    )
    .context("building the token verifier")?;
    tracing::info!(domain = %config.auth.domain, "token verifier ready");

    let state = AppState {
        pool,
        verifier: Arc::new(verifier),
    };

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {}", bind_addr))?;
    tracing::info!("listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")?;

    Ok(())
}
