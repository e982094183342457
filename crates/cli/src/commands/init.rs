use anyhow::Result;
use clap::Args;
use tokio::fs::{create_dir_all, write};

use crate::config::{Config, get_changecast_dir};

#[derive(Args, Debug)]
#[command(about = "Initialize a new changecast project")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Initialize a new changecast project
///
/// # Errors
/// Returns error if the project is already initialized or the configuration
/// skeleton cannot be written.
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    // create .changecast directory
    let current_dir = std::env::current_dir()?;
    let changecast_dir = get_changecast_dir(&current_dir);
    if !args.dry_run {
        create_dir_all(&changecast_dir).await?;
    }
    // create config.json skeleton
    let config_file = changecast_dir.join("config.json");
    if config_file.exists() {
        Err(anyhow::anyhow!("changecast project already initialized"))
    } else {
        if !args.dry_run {
            write(
                config_file,
                serde_json::to_string_pretty(&Config::default())?,
            )
            .await?;
        }

        println!(
            "changecast project initialized in {}",
            changecast_dir.display()
        );

        Ok(())
    }
}
