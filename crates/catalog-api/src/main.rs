use anyhow::Context;
use catalog_api::{settings::AppConfig, telemetry, ApiServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging.filter);

    let server = ApiServer::from_config(config).context("failed to initialise storage")?;
    server.run().await.context("server error")?;

    Ok(())
}
