use std::sync::Arc;

use anyhow::Result;
use roadmapper::{config::Config, generation::create_generator, http::start_http_server};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    roadmapper::load_env();

    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(config.runtime.log_level.clone())
        .with_ansi(false)
        .init();

    info!(
        "Starting roadmapper (provider={}, model={}, style={})",
        config.generation.provider, config.generation.model, config.runtime.prompt_style
    );

    // A failed handle stays None for the process lifetime; every request
    // then answers 500 until a restart with corrected configuration.
    let generator = match create_generator(&config) {
        Ok(g) => Some(g),
        Err(e) => {
            error!("Generator not initialized: {e}");
            None
        }
    };

    start_http_server(Arc::new(config), generator).await
}
