use std::collections::BTreeMap;

/// Built-in announcement template, used when no template directory is
/// configured. Tokens come from the announcement context.
pub const DEFAULT_TEMPLATE: &str = r"The ${developmentTeam} is pleased to announce the ${artifactId}-${releaseVersion} release!

${introduction}

Changes in this version include:

${actionList}

For more information, please visit ${url}

Have fun!
-${developmentTeam}
";

/// Substitute `${key}` tokens from the context into the template.
///
/// Unknown tokens are left in place so typos surface in the output rather
/// than vanishing silently.
#[must_use]
pub fn render_template(template: &str, context: &BTreeMap<String, String>) -> String {
    let mut output = template.to_string();
    for (key, value) in context {
        output = output.replace(&format!("${{{key}}}"), value);
    }
    output
}
