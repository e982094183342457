use anyhow::Result;
use clap::Args;

use crate::config::get_changecast_config;

#[derive(Args, Debug)]
#[command(about = "Show the resolved changecast configuration")]
pub struct ConfigArgs {}

/// Display the resolved changecast configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(_args: &ConfigArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = get_changecast_config(&current_dir).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
