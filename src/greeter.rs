use std::io::Write;

use anyhow::{Context, Result};

use crate::config::AppConfig;

pub struct Greeter<'a> {
    name: &'a str,
}

impl<'a> Greeter<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { name: &config.name }
    }

    pub fn message(&self) -> String {
        let mut msg = String::from("Hello ");
        msg.push_str(self.name);
        msg.push('!');
        msg
    }

    /// Writes the message followed by a single newline.
    pub fn greet<W: Write>(&self, out: &mut W) -> Result<()> {
        let msg = self.message();
        tracing::info!("Greeting {:?}", self.name);

        writeln!(out, "{}", msg).context("Failed to write greeting")?;
        out.flush().context("Failed to flush greeting")?;

        Ok(())
    }
}
