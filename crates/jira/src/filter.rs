use anyhow::Result;

// Classic JIRA workflow ids; the search-request endpoint filters by id,
// while the configuration names statuses and resolutions.
const STATUS_IDS: [(&str, &str); 5] = [
    ("Open", "1"),
    ("In Progress", "3"),
    ("Reopened", "4"),
    ("Resolved", "5"),
    ("Closed", "6"),
];

const RESOLUTION_IDS: [(&str, &str); 5] = [
    ("Fixed", "1"),
    ("Won't Fix", "2"),
    ("Duplicate", "3"),
    ("Incomplete", "4"),
    ("Cannot Reproduce", "5"),
];

/// Resolve a comma-separated list of status names to their numeric ids.
///
/// Names are matched case-insensitively; blank entries are skipped.
///
/// # Errors
/// Returns error naming the first unknown status.
pub fn status_ids(names: &str) -> Result<Vec<String>> {
    resolve(names, &STATUS_IDS, "status")
}

/// Resolve a comma-separated list of resolution names to their numeric ids.
///
/// Names are matched case-insensitively; blank entries are skipped.
///
/// # Errors
/// Returns error naming the first unknown resolution.
pub fn resolution_ids(names: &str) -> Result<Vec<String>> {
    resolve(names, &RESOLUTION_IDS, "resolution")
}

fn resolve(names: &str, table: &[(&str, &str)], kind: &str) -> Result<Vec<String>> {
    names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            table
                .iter()
                .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
                .map(|(_, id)| (*id).to_string())
                .ok_or_else(|| anyhow::anyhow!("Unknown JIRA {kind} '{name}'"))
        })
        .collect()
}
