use anyhow::Context;
use optimizer_uploader::{
    domain::config::settings::Settings,
    startup::{build_router, build_state},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::from_env().context("Failed to read configuration")?;

    tracing::info!(
        optimizer_url = %settings.optimizer_url,
        max_upload_bytes = settings.max_upload_bytes,
        "Starting optimizer-uploader"
    );

    let router = build_router(build_state(&settings), settings.max_upload_bytes);

    let address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;

    tracing::info!("Upload page available at http://{}", address);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
