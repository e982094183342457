use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use changecast_core::IssueManagement;
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;

/// Loaded from `.changecast/config.json`, controls project coordinates,
/// source locations, JIRA filters and template output.
///
/// Every field has a default so a partial configuration file, or none at
/// all, still resolves to a usable configuration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Project group identifier passed through to the template
    #[serde(default)]
    pub group_id: String,

    /// Artifact name used in the announcement
    #[serde(default)]
    pub artifact_id: String,

    /// Version to announce; a `-SNAPSHOT` suffix is stripped before matching
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub packaging: String,

    /// Project URL, also the fallback introduction
    #[serde(default)]
    pub url: String,

    /// URL where the artifact can be downloaded
    #[serde(default)]
    pub download_url: String,

    /// Name of the team that develops the artifact
    #[serde(default)]
    pub development_team: String,

    /// Short description or introduction of the released artifact
    #[serde(default)]
    pub introduction: String,

    /// Path of the changes XML file (default: "changes.xml")
    #[serde(default = "default_changes_file")]
    pub changes_file: PathBuf,

    /// Directory where the announcement file is written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Announcement template file name; also the output file name
    #[serde(default = "default_template")]
    pub template: String,

    /// Directory holding custom templates; the embedded default template is
    /// used when unset
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// Merge tracker releases into the changes file releases
    #[serde(default)]
    pub merge: bool,

    #[serde(default)]
    pub issue_management: Option<IssueManagement>,

    #[serde(default)]
    pub jira: JiraOptions,
}

/// JIRA fetch options, only consulted when `merge` is enabled.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JiraOptions {
    /// Include issues with these statuses, comma separated (default: "Closed")
    #[serde(default = "default_status_names")]
    pub status_names: String,

    /// Include issues with these resolutions, comma separated (default: "Fixed")
    #[serde(default = "default_resolution_names")]
    pub resolution_names: String,

    /// Maximum number of issues to fetch (default: 25)
    #[serde(default = "default_max_entries")]
    pub max_entries: u32,

    /// Credentials for a private installation
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn default_changes_file() -> PathBuf {
    PathBuf::from("changes.xml")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("announcement")
}

fn default_template() -> String {
    "announcement.txt".to_string()
}

fn default_status_names() -> String {
    "Closed".to_string()
}

fn default_resolution_names() -> String {
    "Fixed".to_string()
}

const fn default_max_entries() -> u32 {
    25
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_id: String::new(),
            artifact_id: String::new(),
            version: String::new(),
            packaging: String::new(),
            url: String::new(),
            download_url: String::new(),
            development_team: String::new(),
            introduction: String::new(),
            changes_file: default_changes_file(),
            output_dir: default_output_dir(),
            template: default_template(),
            template_dir: None,
            merge: false,
            issue_management: None,
            jira: JiraOptions::default(),
        }
    }
}

impl Default for JiraOptions {
    fn default() -> Self {
        Self {
            status_names: default_status_names(),
            resolution_names: default_resolution_names(),
            max_entries: default_max_entries(),
            user: None,
            password: None,
        }
    }
}

/// Directory holding the changecast configuration.
#[must_use]
pub fn get_changecast_dir(current_dir: &Path) -> PathBuf {
    current_dir.join(".changecast")
}

/// Load the configuration, falling back to defaults when no file exists.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub async fn get_changecast_config(current_dir: &Path) -> Result<Config> {
    let config_file = get_changecast_dir(current_dir).join("config.json");
    if !config_file.exists() {
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .with_context(|| format!("Failed to read {}", config_file.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_file.display()))
}
