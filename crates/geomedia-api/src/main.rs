mod api_doc;
mod error;
mod handlers;
mod logging;
mod setup;
mod state;

use geomedia_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = Config::from_env()?;

    logging::init_tracing();

    // Initialize the application (storage backend, state, routes)
    let (_state, router) = setup::initialize_app(config.clone()).await?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
