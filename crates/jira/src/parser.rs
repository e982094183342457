use anyhow::Result;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::issue::Issue;

/// Parse a JIRA XML search result into its ordered issue list.
///
/// Reads the `<item>` elements of the RSS-shaped search-request output and
/// extracts key, summary, type, status, resolution, assignee, link and any
/// number of `<fixVersion>` elements per item. Elements outside an item are
/// ignored, as are unknown elements inside one.
///
/// # Errors
/// Returns error if the XML is malformed.
pub fn parse_jira_xml(content: &str) -> Result<Vec<Issue>> {
    let mut reader = Reader::from_str(content);

    let mut issues = Vec::new();
    let mut current_issue: Option<Issue> = None;
    let mut current_field: Option<Vec<u8>> = None;
    let mut field_text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"item" {
                    current_issue = Some(Issue::default());
                } else if current_issue.is_some() && is_issue_field(&name) {
                    current_field = Some(name);
                    field_text.clear();
                }
            }
            Ok(Event::Text(e)) => {
                if current_field.is_some() {
                    field_text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                if name.as_ref() == b"item" {
                    if let Some(issue) = current_issue.take() {
                        issues.push(issue);
                    }
                } else if let Some(field) = current_field.take()
                    && field.as_slice() == name.as_ref()
                    && let Some(issue) = current_issue.as_mut()
                {
                    assign_field(issue, &field, field_text.trim());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("XML parsing error: {e}")),
            Ok(_) => {}
        }
        buf.clear();
    }

    Ok(issues)
}

fn is_issue_field(name: &[u8]) -> bool {
    matches!(
        name,
        b"key" | b"summary" | b"type" | b"status" | b"resolution" | b"assignee" | b"fixVersion"
            | b"link"
    )
}

fn assign_field(issue: &mut Issue, field: &[u8], value: &str) {
    match field {
        b"key" => issue.key = value.to_string(),
        b"summary" => issue.summary = value.to_string(),
        b"type" => issue.issue_type = value.to_string(),
        b"status" => issue.status = value.to_string(),
        b"resolution" => issue.resolution = value.to_string(),
        b"assignee" => issue.assignee = value.to_string(),
        b"fixVersion" => issue.fix_versions.push(value.to_string()),
        b"link" => issue.link = value.to_string(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_RESULT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="0.92">
  <channel>
    <title>Search result</title>
    <link>https://issues.example.org</link>
    <item>
      <title>[CC-2] Merge drops actions</title>
      <link>https://issues.example.org/browse/CC-2</link>
      <key>CC-2</key>
      <summary>Merge drops actions</summary>
      <type>Bug</type>
      <status>Closed</status>
      <resolution>Fixed</resolution>
      <assignee>Jane Doe</assignee>
      <fixVersion>1.1</fixVersion>
    </item>
    <item>
      <title>[CC-3] Support snapshot versions</title>
      <key>CC-3</key>
      <summary>Support snapshot versions</summary>
      <type>New Feature</type>
      <status>Resolved</status>
      <resolution>Fixed</resolution>
      <assignee>Sam Smith</assignee>
      <fixVersion>1.1</fixVersion>
      <fixVersion>2.0</fixVersion>
    </item>
    <item>
      <key>CC-4</key>
      <summary>Unscheduled cleanup</summary>
      <type>Improvement</type>
      <status>Open</status>
    </item>
  </channel>
</rss>
"#;

    #[test]
    fn test_parse_issues_in_document_order() {
        let issues = parse_jira_xml(SEARCH_RESULT).unwrap();

        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].key, "CC-2");
        assert_eq!(issues[1].key, "CC-3");
        assert_eq!(issues[2].key, "CC-4");
    }

    #[test]
    fn test_parse_issue_fields() {
        let issues = parse_jira_xml(SEARCH_RESULT).unwrap();

        let issue = &issues[0];
        assert_eq!(issue.summary, "Merge drops actions");
        assert_eq!(issue.issue_type, "Bug");
        assert_eq!(issue.status, "Closed");
        assert_eq!(issue.resolution, "Fixed");
        assert_eq!(issue.assignee, "Jane Doe");
        assert_eq!(issue.link, "https://issues.example.org/browse/CC-2");
        assert_eq!(issue.fix_versions, vec!["1.1".to_string()]);
    }

    #[test]
    fn test_parse_multiple_fix_versions() {
        let issues = parse_jira_xml(SEARCH_RESULT).unwrap();

        assert_eq!(
            issues[1].fix_versions,
            vec!["1.1".to_string(), "2.0".to_string()]
        );
    }

    #[test]
    fn test_parse_missing_fields_left_empty() {
        let issues = parse_jira_xml(SEARCH_RESULT).unwrap();

        let issue = &issues[2];
        assert!(issue.resolution.is_empty());
        assert!(issue.assignee.is_empty());
        assert!(issue.fix_versions.is_empty());
    }

    #[test]
    fn test_parse_elements_outside_item_ignored() {
        let issues =
            parse_jira_xml("<rss><channel><link>x</link><title>y</title></channel></rss>").unwrap();

        assert!(issues.is_empty());
    }

    #[test]
    fn test_parse_malformed_xml_fails() {
        assert!(parse_jira_xml("<rss><channel><item>").is_err());
    }
}
