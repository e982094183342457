use std::path::Path;

use anyhow::{Context, Result};
use changecast_changes::ChangesFile;
use changecast_core::{
    AnnouncementMetadata, Release, ReleaseSource, announcement_context, latest_release,
    merge_releases, validate_issue_management,
};
use changecast_jira::{JiraQuery, JiraSource};
use clap::Args;
use colored::Colorize;
use tokio::fs::{create_dir_all, read_to_string, write};

use crate::config::{Config, get_changecast_config};
use crate::render::{DEFAULT_TEMPLATE, render_template};

#[derive(Args, Debug)]
#[command(about = "Generate the release announcement")]
pub struct GenerateArgs {
    /// Version to announce, overriding the configured one
    #[arg(short, long)]
    pub project_version: Option<String>,

    /// Print the announcement instead of writing it
    #[arg(short, long, default_value = "false")]
    pub dry_run: bool,
}

/// Generate the release announcement
///
/// # Errors
/// Returns error if a source cannot be read, the issue management section
/// is misconfigured, no release matches the version, or the announcement
/// cannot be written.
pub async fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = get_changecast_config(&current_dir).await?;

    let version = args
        .project_version
        .clone()
        .unwrap_or_else(|| config.version.clone());
    if version.is_empty() {
        anyhow::bail!(
            "No version to announce: set version in .changecast/config.json or pass --project-version"
        );
    }

    let releases = collect_releases(&config, &current_dir).await?;
    let release = latest_release(&releases, &version)?;

    let metadata = AnnouncementMetadata {
        group_id: config.group_id.clone(),
        artifact_id: config.artifact_id.clone(),
        version: version.clone(),
        packaging: config.packaging.clone(),
        url: config.url.clone(),
        download_url: config.download_url.clone(),
        development_team: config.development_team.clone(),
        introduction: config.introduction.clone(),
    };
    let context = announcement_context(release, &releases, &metadata);

    let template = match &config.template_dir {
        Some(template_dir) => {
            let template_file = current_dir.join(template_dir).join(&config.template);
            read_to_string(&template_file)
                .await
                .with_context(|| format!("Failed to read template {}", template_file.display()))?
        }
        None => DEFAULT_TEMPLATE.to_string(),
    };
    let announcement = render_template(&template, &context);

    if args.dry_run {
        println!("{announcement}");
        return Ok(());
    }

    let output_dir = current_dir.join(&config.output_dir);
    create_dir_all(&output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let output_file = output_dir.join(&config.template);
    write(&output_file, announcement)
        .await
        .with_context(|| format!("Failed to write {}", output_file.display()))?;

    println!(
        "Created announcement {}",
        output_file.display().to_string().green()
    );
    Ok(())
}

async fn collect_releases(config: &Config, current_dir: &Path) -> Result<Vec<Release>> {
    let changes = ChangesFile::new(current_dir.join(&config.changes_file));

    if !config.merge {
        println!(
            "Creating announcement from {}...",
            changes.path().display()
        );
        return changes.releases().await;
    }

    let changes_releases = changes.releases().await?;

    if let Err(reason) = validate_issue_management(config.issue_management.as_ref()) {
        tracing::error!("{reason}. No JIRA releases will be fetched.");
        anyhow::bail!("Something is wrong with the issue management section");
    }
    // validated above, the URL is present
    let url = config
        .issue_management
        .as_ref()
        .and_then(|issue_management| issue_management.url.clone())
        .context("Issue management URL missing")?;

    let jira = JiraSource::new(JiraQuery {
        url,
        status_names: config.jira.status_names.clone(),
        resolution_names: config.jira.resolution_names.clone(),
        max_entries: config.jira.max_entries,
        user: config.jira.user.clone(),
        password: config.jira.password.clone(),
    });
    println!(
        "Creating announcement from {} merged with JIRA releases...",
        changes.path().display()
    );
    let jira_releases = jira.releases().await?;

    Ok(merge_releases(
        Some(&changes_releases),
        Some(&jira_releases),
    ))
}
