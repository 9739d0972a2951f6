//! Print the default configuration.

use anyhow::Result;
use signal_config::AppConfig;

pub async fn run() -> Result<()> {
    print!("{}", AppConfig::default().to_toml()?);
    Ok(())
}
