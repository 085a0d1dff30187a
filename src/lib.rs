pub mod config;
pub mod greeter;
pub mod logging;

use anyhow::Result;

use crate::config::AppConfig;
use crate::greeter::Greeter;

/// Prints the greeting for `config` on stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    Greeter::new(config).greet(&mut out)
}
