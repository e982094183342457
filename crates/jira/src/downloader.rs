use anyhow::{Context, Result};

use crate::filter::{resolution_ids, status_ids};

/// Connection settings for a JIRA search-request download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraQuery {
    /// Issue-management URL of the `…/browse/KEY` form
    pub url: String,
    /// Comma-separated status names to include
    pub status_names: String,
    /// Comma-separated resolution names to include
    pub resolution_names: String,
    /// Maximum number of issues to fetch
    pub max_entries: u32,
    /// Credentials for a private installation
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Split an issue-management URL into the JIRA root URL and the project key.
///
/// # Errors
/// Returns error if the URL is not of the `…/browse/KEY` form.
pub fn project_from_url(url: &str) -> Result<(String, String)> {
    let url = url.trim().trim_end_matches('/');
    let (root, key) = url
        .split_once("/browse/")
        .with_context(|| format!("Expected an issue management URL of the form …/browse/KEY, got '{url}'"))?;
    if root.is_empty() || key.is_empty() || key.contains('/') {
        anyhow::bail!("Expected an issue management URL of the form …/browse/KEY, got '{url}'");
    }
    Ok((root.to_string(), key.to_string()))
}

/// Build the XML search-request URL for the configured filters.
///
/// # Errors
/// Returns error if the project URL or a filter name is invalid.
pub fn search_url(query: &JiraQuery) -> Result<String> {
    let (root, key) = project_from_url(&query.url)?;

    let mut url =
        format!("{root}/secure/IssueNavigator.jspa?view=rss&reset=true&decorator=none&pid={key}");
    for id in status_ids(&query.status_names)? {
        url.push_str("&statusIds=");
        url.push_str(&id);
    }
    for id in resolution_ids(&query.resolution_names)? {
        url.push_str("&resolutionIds=");
        url.push_str(&id);
    }
    url.push_str("&sorter/field=issuekey&sorter/order=DESC");
    url.push_str(&format!("&tempMax={}", query.max_entries));
    Ok(url)
}

/// Download the XML search result body.
///
/// One blocking fetch, no retry; a retry policy belongs to the caller.
///
/// # Errors
/// Returns error if the request fails or the response status is not
/// successful.
pub async fn download(query: &JiraQuery) -> Result<String> {
    let url = search_url(query)?;
    tracing::debug!("fetching JIRA releases from {url}");

    let client = reqwest::Client::new();
    let mut request = client.get(&url);
    if let Some(user) = &query.user {
        request = request.basic_auth(user, query.password.as_deref());
    }

    let response = request
        .send()
        .await
        .with_context(|| format!("JIRA request to {url} failed"))?;
    if !response.status().is_success() {
        anyhow::bail!("JIRA request failed with status {}", response.status());
    }
    response
        .text()
        .await
        .context("Failed to read the JIRA response body")
}
