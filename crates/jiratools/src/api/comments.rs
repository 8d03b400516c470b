//! Comment resource client
//!
//! Comments live under their issue; bodies travel as ADF documents built
//! by the core transformer.

use reqwest::Method;
use serde_json::Value;

use jiratools_core::error::ApiError;
use jiratools_core::fields::comment_payload;
use jiratools_core::types::{Comment, CommentList};

use crate::client::JiraClient;

impl JiraClient {
    /// Add a comment to an issue, optionally restricted to a visibility
    /// group or role.
    pub async fn add_comment(
        &self,
        issue_key: &str,
        text: &str,
        visibility: Option<Value>,
    ) -> Result<Comment, ApiError> {
        let payload = comment_payload(text, visibility);
        let response = self
            .send(
                Method::POST,
                &format!("issue/{}/comment", urlencoding::encode(issue_key)),
                &payload,
            )
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("id"))
    }

    /// Fetch a single comment.
    pub async fn get_comment(&self, issue_key: &str, comment_id: &str) -> Result<Comment, ApiError> {
        let response = self
            .get(
                &format!(
                    "issue/{}/comment/{}",
                    urlencoding::encode(issue_key),
                    urlencoding::encode(comment_id)
                ),
                &[],
            )
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("id"))
    }

    /// Fetch all comments on an issue.
    pub async fn get_comments(&self, issue_key: &str) -> Result<CommentList, ApiError> {
        let response = self
            .get(
                &format!("issue/{}/comment", urlencoding::encode(issue_key)),
                &[],
            )
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("comments"))
    }

    /// Replace the body (and optionally visibility) of a comment.
    pub async fn update_comment(
        &self,
        issue_key: &str,
        comment_id: &str,
        text: &str,
        visibility: Option<Value>,
    ) -> Result<Comment, ApiError> {
        let payload = comment_payload(text, visibility);
        let response = self
            .send(
                Method::PUT,
                &format!(
                    "issue/{}/comment/{}",
                    urlencoding::encode(issue_key),
                    urlencoding::encode(comment_id)
                ),
                &payload,
            )
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("id"))
    }

    /// Delete a comment from an issue.
    pub async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &format!(
                "issue/{}/comment/{}",
                urlencoding::encode(issue_key),
                urlencoding::encode(comment_id)
            ),
            &Value::Null,
        )
        .await?;
        Ok(())
    }
}
