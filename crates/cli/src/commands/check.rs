use anyhow::Result;
use changecast_changes::ChangesFile;
use changecast_core::{ReleaseSource, validate_issue_management};
use clap::Args;
use colored::Colorize;

use crate::config::get_changecast_config;

#[derive(Args, Debug)]
#[command(about = "List releases and validate the configuration")]
pub struct CheckArgs {}

/// List parsed releases and report issue-management validity
///
/// # Errors
/// Returns error if the configuration or changes file cannot be read.
pub async fn handle_check(_args: &CheckArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = get_changecast_config(&current_dir).await?;

    let changes = ChangesFile::new(current_dir.join(&config.changes_file));
    let releases = changes.releases().await?;

    println!("Found {} releases", releases.len());
    for release in &releases {
        println!("{release}");
    }

    match validate_issue_management(config.issue_management.as_ref()) {
        Ok(()) => println!("{}", "Issue management is configured for JIRA".green()),
        Err(reason) => println!("{}", format!("Issue management: {reason}").yellow()),
    }

    Ok(())
}
