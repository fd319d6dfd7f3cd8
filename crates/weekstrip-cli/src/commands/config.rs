use anyhow::Result;
use tracing::info;

use weekstrip_core::AppConfig;

pub fn run(config: &AppConfig, path_only: bool, init: bool) -> Result<()> {
    let path = AppConfig::config_path();
    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    if init {
        config.save()?;
        info!(path = %path.display(), "Wrote configuration");
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not found, showing defaults)", path.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
