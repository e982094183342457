use anyhow::Result;
use async_trait::async_trait;

use crate::release::Release;

/// A provider of ordered release records.
///
/// Implemented by the changes file reader and the issue tracker client so
/// the announcement pipeline can consume either one, or merge both.
#[async_trait]
pub trait ReleaseSource: std::fmt::Debug + Send + Sync {
    /// Human-readable name of the source, used in progress output.
    fn name(&self) -> &str;

    /// Produce the source's releases, newest first in source order.
    ///
    /// # Errors
    /// Returns error if the underlying file or network read fails.
    async fn releases(&self) -> Result<Vec<Release>>;
}
