use clap::Parser;
use jiff::SignedDuration;
use snip_gateway::app::App;
use snip_gateway::cli::Cli;
use snip_gateway::state::AppState;
use snip_generator::{GeneratorSettings, HashGenerator};
use snip_shortener::ShortenerService;
use snip_store::InMemoryMappingStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Cli::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        short_path_length = config.short_path_length,
        retention_days = config.retention_days,
        "starting gateway server"
    );

    let generator = HashGenerator::new(
        GeneratorSettings::builder()
            .length(config.short_path_length)
            .build(),
    )?;
    let service = ShortenerService::with_retention(
        InMemoryMappingStore::new(),
        generator,
        SignedDuration::from_hours(24 * config.retention_days),
    );
    let state = AppState::new(Arc::new(service), config.base_url);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
