/// One issue from a JIRA XML search result.
///
/// Fields mirror the elements of an `<item>` in the search-request output;
/// absent elements are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub issue_type: String,
    pub status: String,
    pub resolution: String,
    pub assignee: String,
    pub fix_versions: Vec<String>,
    pub link: String,
}

impl Issue {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }
}
