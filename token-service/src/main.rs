use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use token_service::{router, shutdown, TokenService, TokenServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "token_service=info,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = TokenServiceConfig::from_env()?;
    tracing::info!("Starting RTC token service v{}", config.version);

    // Missing credentials leave the service up; every issuance will fail
    for var in config.missing_credentials() {
        tracing::error!("{} is not set, tokens cannot be issued until it is configured", var);
    }

    let app = router(TokenService::from_config(&config));

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!("HTTP server listening on {}", config.http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for(tokio::signal::ctrl_c()))
        .await?;

    Ok(())
}
