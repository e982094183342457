use anyhow::{Context, Result};
use changecast_core::{Action, Release};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse a changes document into its ordered release list.
///
/// Expects `<release version=".." date=".." description="..">` elements with
/// nested `<action dev=".." type=".." issue=".." due-to="..">text</action>`
/// children. The `version` attribute is required on releases; everything
/// else is optional. Action text is whitespace-collapsed into the action
/// description. Release elements outside the expected nesting are still
/// picked up; unknown elements are ignored.
///
/// # Errors
/// Returns error if the XML is malformed or a release has no version.
pub fn parse_changes_xml(content: &str) -> Result<Vec<Release>> {
    let mut reader = Reader::from_str(content);

    let mut releases = Vec::new();
    let mut current_release: Option<Release> = None;
    let mut current_action: Option<Action> = None;
    let mut action_text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"release" => current_release = Some(release_from_attributes(&e)?),
                b"action" => {
                    current_action = Some(action_from_attributes(&e)?);
                    action_text.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"release" => releases.push(release_from_attributes(&e)?),
                b"action" => {
                    if let Some(release) = current_release.as_mut() {
                        release.actions.push(action_from_attributes(&e)?);
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if current_action.is_some() {
                    action_text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"release" => {
                    if let Some(release) = current_release.take() {
                        releases.push(release);
                    }
                }
                b"action" => {
                    if let Some(mut action) = current_action.take() {
                        let text = collapse_whitespace(&action_text);
                        if !text.is_empty() {
                            action.description = text;
                        }
                        if let Some(release) = current_release.as_mut() {
                            release.actions.push(action);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("XML parsing error: {e}")),
            Ok(_) => {}
        }
        buf.clear();
    }

    Ok(releases)
}

fn release_from_attributes(element: &BytesStart<'_>) -> Result<Release> {
    let mut version = None;
    let mut date = None;
    let mut description = None;

    for attribute in element.attributes() {
        let attribute = attribute.context("Invalid attribute on release element")?;
        let value = attribute
            .unescape_value()
            .context("Invalid attribute value on release element")?
            .into_owned();
        match attribute.key.local_name().as_ref() {
            b"version" => version = Some(value),
            b"date" => date = Some(value),
            b"description" => description = Some(value),
            _ => {}
        }
    }

    let version = version.context("release element without a version attribute")?;
    Ok(Release::new(version, date, description, Vec::new()))
}

fn action_from_attributes(element: &BytesStart<'_>) -> Result<Action> {
    let mut action_type = String::new();
    let mut issue = None;
    let mut due_to = None;

    for attribute in element.attributes() {
        let attribute = attribute.context("Invalid attribute on action element")?;
        let value = attribute
            .unescape_value()
            .context("Invalid attribute value on action element")?
            .into_owned();
        match attribute.key.local_name().as_ref() {
            b"type" => action_type = value,
            b"issue" => issue = Some(value),
            b"due-to" => due_to = Some(value),
            _ => {}
        }
    }

    Ok(Action::new(action_type, issue, String::new(), due_to))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
