use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use changecast_core::{Release, ReleaseSource};
use tokio::fs::read_to_string;

use crate::parser::parse_changes_xml;

/// Release source backed by a changes XML file on disk.
#[derive(Debug)]
pub struct ChangesFile {
    path: PathBuf,
}

impl ChangesFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReleaseSource for ChangesFile {
    fn name(&self) -> &str {
        "changes file"
    }

    async fn releases(&self) -> Result<Vec<Release>> {
        tracing::debug!("reading changes file {}", self.path.display());
        let content = read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read changes file {}", self.path.display()))?;
        parse_changes_xml(&content)
            .with_context(|| format!("Failed to parse changes file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_releases_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("changes.xml");
        fs::write(
            &path,
            r#"<document><body>
                <release version="1.0" date="2026-01-15">
                  <action type="add" issue="CC-1">First release.</action>
                </release>
              </body></document>"#,
        )
        .unwrap();

        let source = ChangesFile::new(&path);
        let releases = source.releases().await.unwrap();

        assert_eq!(source.name(), "changes file");
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].version, "1.0");
        assert_eq!(releases[0].actions.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_fails_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.xml");

        let source = ChangesFile::new(&path);
        let error = source.releases().await.unwrap_err();

        assert!(format!("{error:#}").contains("missing.xml"));
    }

    #[tokio::test]
    async fn test_malformed_file_fails_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("changes.xml");
        fs::write(&path, "<document><body><release").unwrap();

        let source = ChangesFile::new(&path);
        let error = source.releases().await.unwrap_err();

        assert!(format!("{error:#}").contains("changes.xml"));
    }
}
