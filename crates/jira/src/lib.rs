mod downloader;
mod filter;
mod issue;
mod parser;
mod releases;

pub use downloader::{JiraQuery, download, search_url};
pub use filter::{resolution_ids, status_ids};
pub use issue::Issue;
pub use parser::parse_jira_xml;
pub use releases::{action_type_for, issues_to_releases};

use anyhow::Result;
use async_trait::async_trait;
use changecast_core::{Release, ReleaseSource};

/// Release source backed by a JIRA search request.
///
/// Downloads the XML search result, parses the issues and groups them into
/// releases keyed by fix version.
#[derive(Debug)]
pub struct JiraSource {
    query: JiraQuery,
}

impl JiraSource {
    #[must_use]
    pub const fn new(query: JiraQuery) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ReleaseSource for JiraSource {
    fn name(&self) -> &str {
        "jira"
    }

    async fn releases(&self) -> Result<Vec<Release>> {
        let body = download(&self.query).await?;
        let issues = parse_jira_xml(&body)?;
        tracing::debug!("fetched {} issues from JIRA", issues.len());
        Ok(issues_to_releases(&issues))
    }
}
