use traceup_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load a local .env if present, then the real environment
    dotenvy::dotenv().ok();

    traceup_api::telemetry::init_tracing();

    let config = Config::from_env()?;

    // Initialize the application (storage, routes)
    let (_state, router) = traceup_api::setup::initialize_app(config.clone())?;

    // Start the server
    traceup_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
