//! Issue resource client

use std::path::Path;

use reqwest::Method;
use serde_json::{json, Value};

use jiratools_core::error::ApiError;
use jiratools_core::fields::simple_create_fields;
use jiratools_core::types::{CreatedIssue, Issue, SearchResults};

use crate::client::JiraClient;

impl JiraClient {
    /// Fetch an issue by key.
    pub async fn get_issue(&self, issue_key: &str) -> Result<Issue, ApiError> {
        let response = self
            .get(&format!("issue/{}", urlencoding::encode(issue_key)), &[])
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("issue"))
    }

    /// Create an issue from a prebuilt `{"fields": {...}}` payload.
    pub async fn create_issue(&self, data: &Value) -> Result<CreatedIssue, ApiError> {
        let response = self.send(Method::POST, "issue", data).await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("key"))
    }

    /// Simpler interface for [`Self::create_issue`] covering the common
    /// case. `project` and `issue_type` may be numeric ids or a
    /// key/name; `custom` merges beneath the explicit fields.
    pub async fn simple_create_issue(
        &self,
        project: &str,
        summary: &str,
        description: &str,
        issue_type: &str,
        time_tracking: Option<Value>,
        custom: Option<Value>,
    ) -> Result<CreatedIssue, ApiError> {
        let data = simple_create_fields(
            project,
            summary,
            description,
            issue_type,
            time_tracking,
            custom,
        );
        self.create_issue(&data).await
    }

    /// Apply field changes to an issue.
    pub async fn update_issue(&self, issue_key: &str, data: &Value) -> Result<(), ApiError> {
        self.send(
            Method::PUT,
            &format!("issue/{}", urlencoding::encode(issue_key)),
            data,
        )
        .await?;
        Ok(())
    }

    /// Delete an issue, optionally taking its sub-tasks with it.
    pub async fn delete_issue(&self, issue_key: &str, delete_subtasks: bool) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &format!(
                "issue/{}?deleteSubtasks={}",
                urlencoding::encode(issue_key),
                delete_subtasks
            ),
            &Value::Null,
        )
        .await?;
        Ok(())
    }

    /// Search issues with a JQL query.
    pub async fn search_issues(
        &self,
        jql: &str,
        fields: &[&str],
        max_results: u32,
    ) -> Result<SearchResults, ApiError> {
        let payload = json!({
            "jql": jql,
            "fields": fields,
            "maxResults": max_results,
        });
        let response = self.send(Method::POST, "search", &payload).await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("issues"))
    }

    /// Assign a user to an issue. An empty name requests the automatic
    /// assignee.
    pub async fn assign_issue(&self, issue_key: &str, assignee: &str) -> Result<(), ApiError> {
        self.send(
            Method::PUT,
            &format!("issue/{}/assignee", urlencoding::encode(issue_key)),
            &json!({ "name": assignee }),
        )
        .await?;
        Ok(())
    }

    /// Upload a file as an attachment on an issue.
    pub async fn attach_file(&self, issue_key: &str, file_path: &Path) -> Result<Value, ApiError> {
        let filename = file_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bytes = tokio::fs::read(file_path)
            .await
            .map_err(|e| ApiError::Transport(format!("failed to read {}: {e}", file_path.display())))?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .send_multipart(
                &format!("issue/{}/attachments", urlencoding::encode(issue_key)),
                form,
            )
            .await?;
        Ok(response.body)
    }

    /// Fetch the create metadata (available issue config) for a project.
    pub async fn get_create_meta(&self, project_key: &str) -> Result<Value, ApiError> {
        let response = self
            .get(
                "issue/createmeta",
                &[
                    ("projectKeys", project_key),
                    ("expand", "projects.issuetypes.fields"),
                ],
            )
            .await?;
        Ok(response.body)
    }
}
