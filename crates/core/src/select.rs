use thiserror::Error;

use crate::release::Release;

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Error raised when no release matches the project version.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("could not find the release '{version}' among the supplied releases")]
pub struct ReleaseNotFound {
    /// The normalized version that was searched for
    pub version: String,
}

/// Strip a trailing `-SNAPSHOT` qualifier from a version string.
///
/// The suffix match is case-sensitive and only one suffix is removed.
#[must_use]
pub fn strip_snapshot(version: &str) -> &str {
    version.strip_suffix(SNAPSHOT_SUFFIX).unwrap_or(version)
}

/// Select the release matching the project's declared version.
///
/// The version is normalized by stripping a `-SNAPSHOT` suffix before
/// matching. The scan runs in list order and the first exact match wins.
///
/// # Errors
/// Returns [`ReleaseNotFound`] if no release carries the normalized version.
pub fn latest_release<'a>(
    releases: &'a [Release],
    project_version: &str,
) -> Result<&'a Release, ReleaseNotFound> {
    let version = strip_snapshot(project_version);
    tracing::debug!("found {} releases", releases.len());

    for release in releases {
        tracing::debug!(
            "the release {} has {} actions",
            release.version,
            release.actions.len()
        );
        if release.version == version {
            tracing::debug!("found the matching release {}", release.version);
            return Ok(release);
        }
    }

    Err(ReleaseNotFound {
        version: version.to_string(),
    })
}
