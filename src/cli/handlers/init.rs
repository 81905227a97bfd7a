use crate::config::{CONFIG_FILE, FolioConfig};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE);

    let config = FolioConfig::default();
    config.save(&config_path)?;

    println!(
        "{} folio config in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());

    Ok(())
}
