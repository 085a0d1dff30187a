use anyhow::Result;
use hello_name::{config::AppConfig, logging, run};

fn main() -> Result<()> {
    logging::init();

    // Load configuration
    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    run(&config)
}
