use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Issue tracker coordinates from the project configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueManagement {
    /// Browse URL of the tracked project, e.g. `https://issues.example.org/browse/CC`
    #[serde(default)]
    pub url: Option<String>,
    /// Tracker system name; only "jira" (any case) is supported
    #[serde(default)]
    pub system: Option<String>,
}

/// Reasons the issue-management section cannot be used for a tracker fetch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IssueManagementError {
    #[error("no issue management configured")]
    NotConfigured,

    #[error("no URL set in issue management")]
    MissingUrl,

    #[error("unsupported issue tracker system '{0}', only jira is supported")]
    UnsupportedSystem(String),
}

/// Validate the issue-management section before any tracker fetch.
///
/// Checks run in order and stop at the first failure: the section must be
/// present, its URL must be non-blank, and a declared system name must
/// case-insensitively equal "jira". An absent system name is accepted.
///
/// # Errors
/// Returns the first failed check as an [`IssueManagementError`].
pub fn validate_issue_management(
    issue_management: Option<&IssueManagement>,
) -> Result<(), IssueManagementError> {
    let Some(issue_management) = issue_management else {
        return Err(IssueManagementError::NotConfigured);
    };

    match &issue_management.url {
        None => return Err(IssueManagementError::MissingUrl),
        Some(url) if url.trim().is_empty() => return Err(IssueManagementError::MissingUrl),
        Some(_) => {}
    }

    if let Some(system) = &issue_management.system
        && !system.eq_ignore_ascii_case("jira")
    {
        return Err(IssueManagementError::UnsupportedSystem(system.clone()));
    }

    Ok(())
}
