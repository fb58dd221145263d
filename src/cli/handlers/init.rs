use crate::config::{BlogConfig, CONFIG_FILE_NAME};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("Already initialized at {}", config_path.display());
    }

    let config = BlogConfig::default();
    config.save(&config_path)?;

    println!("{} blogql config in {}", "Initialized".green(), dir.display());
    println!("  Config: {}", config_path.display());
    println!("  Server: http://{}:{}", config.server.host, config.server.port);

    Ok(())
}
