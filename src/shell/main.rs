use matches::shell::bootstrap::Application;
use matches::shell::config::Settings;
use matches::shell::http::router;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let application = Application::build(&settings).await;
    let app = router(application.state.clone());

    let addr = settings.address();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("matches API listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    application.shutdown().await;
    tracing::info!("matches API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
