use std::fmt::Display;

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// One recorded change entry within a release.
///
/// All fields are opaque to the merge and selection logic; they are carried
/// through to the announcement unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Kind of change: "add", "fix", "update" or "remove"
    #[serde(rename = "type")]
    pub action_type: String,
    /// Issue tracker reference, if any
    #[serde(default)]
    pub issue: Option<String>,
    /// What changed
    pub description: String,
    /// Attribution for the change
    #[serde(default)]
    pub due_to: Option<String>,
}

impl Action {
    #[must_use]
    pub const fn new(
        action_type: String,
        issue: Option<String>,
        description: String,
        due_to: Option<String>,
    ) -> Self {
        Self {
            action_type,
            issue,
            description,
            due_to,
        }
    }
}

/// A named version plus its list of recorded change actions.
///
/// The version string is the join key when merging release lists; equality
/// is exact string match, no trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub version: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Release {
    #[must_use]
    pub const fn new(
        version: String,
        date: Option<String>,
        description: Option<String>,
        actions: Vec<Action>,
    ) -> Self {
        Self {
            version,
            date,
            description,
            actions,
        }
    }
}

impl Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let actions = match self.actions.len() {
            1 => "1 action".to_string(),
            n => format!("{n} actions"),
        };
        match &self.date {
            Some(date) => write!(f, "{} {} ({actions})", self.version.green().bold(), date),
            None => write!(f, "{} ({actions})", self.version.green().bold()),
        }
    }
}
