use crate::release::Release;

/// Find the first release with an exactly matching version.
///
/// First match wins when a list carries duplicate versions.
#[must_use]
pub fn find_release<'a>(releases: &'a [Release], version: &str) -> Option<&'a Release> {
    releases.iter().find(|release| release.version == version)
}

/// Merge releases from two sources into one list.
///
/// Releases sharing a version are combined into a single entry carrying the
/// first list's actions followed by the second list's, both in their
/// original order. Releases present in only one list pass through
/// unchanged. The result keeps the first list's order, with the second
/// list's unmatched releases appended in their own order. Actions are
/// unioned, never deduplicated.
#[must_use]
pub fn merge_releases(first: Option<&[Release]>, second: Option<&[Release]>) -> Vec<Release> {
    let (first, second) = match (first, second) {
        (None, None) => return Vec::new(),
        (Some(first), None) => return first.to_vec(),
        (None, Some(second)) => return second.to_vec(),
        (Some(first), Some(second)) => (first, second),
    };

    let mut merged = Vec::with_capacity(first.len() + second.len());

    for release in first {
        let mut release = release.clone();
        if let Some(other) = find_release(second, &release.version) {
            release.actions.extend(other.actions.iter().cloned());
        }
        merged.push(release);
    }

    // Releases that are only in the second list
    for release in second {
        if find_release(&merged, &release.version).is_none() {
            merged.push(release.clone());
        }
    }

    merged
}
