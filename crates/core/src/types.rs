//! Domain models for Jira API responses
//!
//! Serde types for the payloads the clients and console commands consume.
//! Fields Jira may omit are `Option` or defaulted so a partial response
//! never fails deserialization; rich-text bodies stay `serde_json::Value`
//! until rendered through [`crate::adf`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Jira issue as returned by `GET issue/<key>`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Issue {
    #[serde(default)]
    pub id: Option<String>,
    pub key: String,
    pub fields: IssueFields,
}

/// The subset of issue fields the console renders.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IssueFields {
    pub summary: String,
    /// Plain string or ADF document, depending on the API version
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub issuetype: Option<IssueType>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// A workflow status.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Status {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// An issue type (Bug, Task, Story, ...).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IssueType {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A Jira user reference.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "accountId", default)]
    pub account_id: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "emailAddress", default)]
    pub email_address: Option<String>,
}

impl User {
    /// Preferred human-readable name: display name, then email address.
    pub fn label(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .or(self.email_address.as_deref())
    }
}

/// Response to a successful issue create (201).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
}

/// One available workflow transition for an issue.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Transition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub to: Option<Status>,
}

/// Envelope of `GET issue/<key>/transitions`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TransitionList {
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

/// A comment on an issue; the body stays ADF until rendered.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub body: Value,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

/// Envelope of `GET issue/<key>/comment`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CommentList {
    #[serde(rename = "startAt", default)]
    pub start_at: Option<u64>,
    #[serde(rename = "maxResults", default)]
    pub max_results: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A Jira project.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Project {
    #[serde(default)]
    pub id: Option<String>,
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A worklog entry on an issue.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Worklog {
    pub id: String,
    #[serde(rename = "timeSpent", default)]
    pub time_spent: Option<String>,
    #[serde(rename = "timeSpentSeconds", default)]
    pub time_spent_seconds: Option<u64>,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default)]
    pub comment: Option<Value>,
}

/// Envelope of `GET issue/<key>/worklog`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WorklogList {
    #[serde(rename = "startAt", default)]
    pub start_at: Option<u64>,
    #[serde(rename = "maxResults", default)]
    pub max_results: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub worklogs: Vec<Worklog>,
}

/// An issue priority.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Priority {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Envelope of `POST search`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchResults {
    #[serde(rename = "startAt", default)]
    pub start_at: Option<u64>,
    #[serde(rename = "maxResults", default)]
    pub max_results: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}
