use std::str::FromStr;

use tracing::Level;

const LEVEL_VAR: &str = "LOG_LEVEL";
const DEFAULT_LEVEL: Level = Level::WARN;

/// Installs the fmt subscriber. Diagnostics go to stderr; stdout is reserved for the greeting.
pub fn init() {
    let level = std::env::var(LEVEL_VAR)
        .map(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LEVEL);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_level(raw: &str) -> Level {
    Level::from_str(raw.trim()).unwrap_or(DEFAULT_LEVEL)
}
