use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use tripweaver::api::AppState;
use tripweaver::config::LoggingConfig;
use tripweaver::{Catalog, TripWeaverConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripWeaverConfig::load()?;
    init_tracing(&config.logging);
    info!(version = tripweaver::VERSION, "starting TripWeaver");

    let catalog = Catalog::load(Path::new(&config.catalog.data_dir))?;
    if catalog.is_empty() {
        warn!("place catalog is empty; generated itineraries will have no places");
    }

    let port = config.server.port;
    let state = AppState::new(catalog, config)?;
    web::run(state, port).await
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.format == "compact" {
        builder.compact().init();
    } else {
        builder.init();
    }
}
