mod app;

use anyhow::Result;
use deskterm_core::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Log to stderr; stdout belongs to the raw-mode screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("deskterm=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting DeskTerm v{}", deskterm_core::VERSION);

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    app::run(&config)
}
