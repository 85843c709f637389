//! Config command

use anyhow::Result;
use puck_core::paths::config_path;
use puck_core::Config;

use crate::output;

pub fn run() -> Result<()> {
    let path = config_path()?;
    if path.exists() {
        output::info(&format!("Config already exists at {}", path));
        return Ok(());
    }

    Config::write_default(&path)?;
    output::success(&format!("Wrote default config to {}", path));
    Ok(())
}
