use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single Tempo worklog record. Every field is optional and unknown server
/// fields survive a round-trip through `extra`; the add-on owns the schema,
/// this crate only carries it.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    /// Arrives as a number from some server versions and a string from
    /// others, so it stays a raw JSON value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billed_seconds: Option<i64>,
    /// ISO calendar date (`yyyy-MM-dd`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_started: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<WorklogAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<WorklogIssue>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Worklog {
    /// The id rendered as a URL path segment, if the record has one.
    pub fn id_segment(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorklogAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Reference to the issue the time was logged on; `remaining_estimate_seconds`
/// adjusts the issue's remaining estimate alongside the worklog itself.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorklogIssue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_estimate_seconds: Option<i64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
