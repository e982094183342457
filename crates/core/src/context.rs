use std::collections::BTreeMap;

use crate::release::{Action, Release};

/// Scalar announcement metadata passed through to the template unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementMetadata {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub url: String,
    pub download_url: String,
    pub development_team: String,
    pub introduction: String,
}

/// Build the flat key-value context handed to the renderer.
///
/// The renderer only ever sees strings: the selected release's actions and
/// the full release list are pre-rendered into `actionList` and
/// `releaseList` blocks here. An empty introduction falls back to the
/// project URL.
#[must_use]
pub fn announcement_context(
    release: &Release,
    releases: &[Release],
    metadata: &AnnouncementMetadata,
) -> BTreeMap<String, String> {
    let introduction = if metadata.introduction.is_empty() {
        metadata.url.clone()
    } else {
        metadata.introduction.clone()
    };

    let mut context = BTreeMap::new();
    context.insert("groupId".to_string(), metadata.group_id.clone());
    context.insert("artifactId".to_string(), metadata.artifact_id.clone());
    context.insert("version".to_string(), metadata.version.clone());
    context.insert("packaging".to_string(), metadata.packaging.clone());
    context.insert("url".to_string(), metadata.url.clone());
    context.insert("downloadUrl".to_string(), metadata.download_url.clone());
    context.insert(
        "developmentTeam".to_string(),
        metadata.development_team.clone(),
    );
    context.insert("introduction".to_string(), introduction);
    context.insert("releaseVersion".to_string(), release.version.clone());
    context.insert(
        "releaseDate".to_string(),
        release.date.clone().unwrap_or_default(),
    );
    context.insert(
        "releaseDescription".to_string(),
        release.description.clone().unwrap_or_default(),
    );
    context.insert("actionList".to_string(), format_action_list(release));
    context.insert("releaseList".to_string(), format_release_list(releases));
    context
}

fn format_action_list(release: &Release) -> String {
    release
        .actions
        .iter()
        .map(format_action_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_action_line(action: &Action) -> String {
    let mut line = format!("o [{}] {}", action.action_type, action.description);
    if let Some(issue) = &action.issue
        && !issue.is_empty()
    {
        line.push_str(&format!(" Issue: {issue}."));
    }
    if let Some(due_to) = &action.due_to
        && !due_to.is_empty()
    {
        line.push_str(&format!(" Thanks to {due_to}."));
    }
    line
}

fn format_release_list(releases: &[Release]) -> String {
    releases
        .iter()
        .map(|release| match release.actions.len() {
            1 => format!("{} (1 action)", release.version),
            n => format!("{} ({n} actions)", release.version),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> AnnouncementMetadata {
        AnnouncementMetadata {
            group_id: "org.example".to_string(),
            artifact_id: "widget".to_string(),
            version: "1.0".to_string(),
            packaging: "jar".to_string(),
            url: "https://example.org/widget".to_string(),
            download_url: "https://example.org/widget/download".to_string(),
            development_team: "widget team".to_string(),
            introduction: "A widget library.".to_string(),
        }
    }

    fn release() -> Release {
        Release::new(
            "1.0".to_string(),
            Some("2026-03-01".to_string()),
            Some("First stable release".to_string()),
            vec![
                Action::new(
                    "add".to_string(),
                    Some("CC-1".to_string()),
                    "Added the frobnicator".to_string(),
                    Some("Jane".to_string()),
                ),
                Action::new("fix".to_string(), None, "Fixed the flux".to_string(), None),
            ],
        )
    }

    #[test]
    fn test_context_carries_scalars_unmodified() {
        let release = release();
        let context = announcement_context(&release, std::slice::from_ref(&release), &metadata());

        assert_eq!(context.get("groupId").unwrap(), "org.example");
        assert_eq!(context.get("artifactId").unwrap(), "widget");
        assert_eq!(context.get("version").unwrap(), "1.0");
        assert_eq!(context.get("packaging").unwrap(), "jar");
        assert_eq!(context.get("developmentTeam").unwrap(), "widget team");
        assert_eq!(context.get("introduction").unwrap(), "A widget library.");
        assert_eq!(context.get("releaseVersion").unwrap(), "1.0");
        assert_eq!(context.get("releaseDate").unwrap(), "2026-03-01");
    }

    #[test]
    fn test_empty_introduction_falls_back_to_url() {
        let mut metadata = metadata();
        metadata.introduction = String::new();
        let release = release();

        let context = announcement_context(&release, &[], &metadata);

        assert_eq!(
            context.get("introduction").unwrap(),
            "https://example.org/widget"
        );
    }

    #[test]
    fn test_action_list_block() {
        let release = release();
        let context = announcement_context(&release, &[], &metadata());

        let action_list = context.get("actionList").unwrap();
        let lines: Vec<&str> = action_list.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "o [add] Added the frobnicator Issue: CC-1. Thanks to Jane."
        );
        assert_eq!(lines[1], "o [fix] Fixed the flux");
    }

    #[test]
    fn test_release_list_block() {
        let releases = vec![
            release(),
            Release::new("0.9".to_string(), None, None, Vec::new()),
        ];

        let context = announcement_context(&releases[0], &releases, &metadata());

        let release_list = context.get("releaseList").unwrap();
        assert_eq!(release_list, "1.0 (2 actions)\n0.9 (0 actions)");
    }
}
