//! Issue type resource client

use reqwest::Method;
use serde_json::{json, Value};

use jiratools_core::error::ApiError;
use jiratools_core::types::IssueType;

use crate::client::JiraClient;

impl JiraClient {
    /// Fetch an issue type by id.
    pub async fn get_issue_type(&self, type_id: &str) -> Result<IssueType, ApiError> {
        let response = self
            .get(&format!("issuetype/{}", urlencoding::encode(type_id)), &[])
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("name"))
    }

    /// Fetch all issue types available on the site.
    pub async fn get_issue_types(&self) -> Result<Vec<IssueType>, ApiError> {
        let response = self.get("issuetype", &[]).await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("issuetypes"))
    }

    /// Create an issue type.
    pub async fn create_issue_type(
        &self,
        name: &str,
        description: &str,
        kind: &str,
    ) -> Result<IssueType, ApiError> {
        let response = self
            .send(
                Method::POST,
                "issuetype",
                &json!({
                    "name": name,
                    "description": description,
                    "type": kind,
                }),
            )
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("name"))
    }

    /// Update an existing issue type.
    pub async fn update_issue_type(
        &self,
        type_id: &str,
        name: &str,
        description: &str,
        kind: &str,
    ) -> Result<(), ApiError> {
        self.send(
            Method::PUT,
            &format!("issuetype/{}", urlencoding::encode(type_id)),
            &json!({
                "name": name,
                "description": description,
                "type": kind,
            }),
        )
        .await?;
        Ok(())
    }

    /// Delete an issue type.
    pub async fn delete_issue_type(&self, type_id: &str) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &format!("issuetype/{}", urlencoding::encode(type_id)),
            &Value::Null,
        )
        .await?;
        Ok(())
    }
}
