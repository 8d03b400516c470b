//! Project resource client

use reqwest::Method;
use serde_json::{Map, Value};

use jiratools_core::error::ApiError;
use jiratools_core::types::Project;

use crate::client::JiraClient;

impl JiraClient {
    /// Fetch a project by key.
    pub async fn get_project(&self, project_key: &str) -> Result<Project, ApiError> {
        let response = self
            .get(&format!("project/{}", urlencoding::encode(project_key)), &[])
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("key"))
    }

    /// Fetch all projects visible to the authenticated user.
    pub async fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        let response = self.get("project", &[]).await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("projects"))
    }

    /// The keys of all visible projects, for pickers and autocompletion.
    pub async fn get_project_keys(&self) -> Result<Vec<String>, ApiError> {
        let projects = self.get_projects().await?;
        Ok(projects.into_iter().map(|p| p.key).collect())
    }

    /// Create a project. `options` merges beneath the explicit fields.
    pub async fn create_project(
        &self,
        key: &str,
        name: &str,
        lead: &str,
        options: Option<Value>,
    ) -> Result<Project, ApiError> {
        let mut payload = match options {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        payload.insert("key".to_string(), Value::String(key.to_string()));
        payload.insert("name".to_string(), Value::String(name.to_string()));
        payload.insert("lead".to_string(), Value::String(lead.to_string()));

        let response = self
            .send(Method::POST, "project", &Value::Object(payload))
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("key"))
    }

    /// Rename a project and apply any additional options.
    pub async fn update_project(
        &self,
        project_key: &str,
        name: &str,
        options: Option<Value>,
    ) -> Result<(), ApiError> {
        let mut payload = match options {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        payload.insert("name".to_string(), Value::String(name.to_string()));

        self.send(
            Method::PUT,
            &format!("project/{}", urlencoding::encode(project_key)),
            &Value::Object(payload),
        )
        .await?;
        Ok(())
    }

    /// Delete a project.
    pub async fn delete_project(&self, project_key: &str) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &format!("project/{}", urlencoding::encode(project_key)),
            &Value::Null,
        )
        .await?;
        Ok(())
    }
}
