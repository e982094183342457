use changecast_core::{Action, Release};

use crate::issue::Issue;

/// Group issues into releases keyed by fix version.
///
/// Fix versions appear in first-seen order and each release's actions keep
/// the issue order of the input. An issue scheduled for several fix
/// versions contributes one action to each. Issues without a fix version
/// cannot be attributed to a release and are skipped.
#[must_use]
pub fn issues_to_releases(issues: &[Issue]) -> Vec<Release> {
    let mut releases: Vec<Release> = Vec::new();

    for issue in issues {
        if issue.fix_versions.is_empty() {
            tracing::debug!("issue {} has no fix version, skipping", issue.key);
            continue;
        }
        for fix_version in &issue.fix_versions {
            let index = match releases
                .iter()
                .position(|release| release.version == *fix_version)
            {
                Some(index) => index,
                None => {
                    releases.push(Release::new(fix_version.clone(), None, None, Vec::new()));
                    releases.len() - 1
                }
            };
            releases[index].actions.push(issue_action(issue));
        }
    }

    releases
}

/// Map a JIRA issue type onto a changes action type.
#[must_use]
pub fn action_type_for(issue_type: &str) -> &'static str {
    if issue_type.eq_ignore_ascii_case("bug") {
        "fix"
    } else if issue_type.eq_ignore_ascii_case("new feature") {
        "add"
    } else {
        "update"
    }
}

fn issue_action(issue: &Issue) -> Action {
    let due_to = if issue.assignee.is_empty() {
        None
    } else {
        Some(issue.assignee.clone())
    };
    Action::new(
        action_type_for(&issue.issue_type).to_string(),
        Some(issue.key.clone()),
        issue.summary.clone(),
        due_to,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn issue(key: &str, issue_type: &str, fix_versions: &[&str]) -> Issue {
        Issue {
            summary: format!("Summary of {key}"),
            issue_type: issue_type.to_string(),
            assignee: "Jane Doe".to_string(),
            fix_versions: fix_versions.iter().map(|v| (*v).to_string()).collect(),
            ..Issue::new(key)
        }
    }

    #[rstest]
    #[case("Bug", "fix")]
    #[case("bug", "fix")]
    #[case("New Feature", "add")]
    #[case("Improvement", "update")]
    #[case("Task", "update")]
    #[case("", "update")]
    fn test_action_type_for(#[case] issue_type: &str, #[case] expected: &str) {
        assert_eq!(action_type_for(issue_type), expected);
    }

    #[test]
    fn test_group_by_fix_version_first_seen_order() {
        let issues = vec![
            issue("CC-1", "Bug", &["1.1"]),
            issue("CC-2", "Bug", &["1.0"]),
            issue("CC-3", "Improvement", &["1.1"]),
        ];

        let releases = issues_to_releases(&issues);

        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].version, "1.1");
        assert_eq!(releases[1].version, "1.0");
        assert_eq!(releases[0].actions.len(), 2);
        assert_eq!(releases[1].actions.len(), 1);
    }

    #[test]
    fn test_issue_in_several_fix_versions() {
        let issues = vec![issue("CC-1", "Bug", &["1.1", "2.0"])];

        let releases = issues_to_releases(&issues);

        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].actions[0].issue.as_deref(), Some("CC-1"));
        assert_eq!(releases[1].actions[0].issue.as_deref(), Some("CC-1"));
    }

    #[test]
    fn test_issue_without_fix_version_skipped() {
        let issues = vec![issue("CC-1", "Bug", &[]), issue("CC-2", "Bug", &["1.0"])];

        let releases = issues_to_releases(&issues);

        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].actions.len(), 1);
        assert_eq!(releases[0].actions[0].issue.as_deref(), Some("CC-2"));
    }

    #[test]
    fn test_action_fields_from_issue() {
        let issues = vec![issue("CC-7", "New Feature", &["1.0"])];

        let releases = issues_to_releases(&issues);

        let action = &releases[0].actions[0];
        assert_eq!(action.action_type, "add");
        assert_eq!(action.issue.as_deref(), Some("CC-7"));
        assert_eq!(action.description, "Summary of CC-7");
        assert_eq!(action.due_to.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_empty_assignee_is_no_attribution() {
        let mut unassigned = issue("CC-8", "Bug", &["1.0"]);
        unassigned.assignee = String::new();

        let releases = issues_to_releases(&[unassigned]);

        assert!(releases[0].actions[0].due_to.is_none());
    }
}
