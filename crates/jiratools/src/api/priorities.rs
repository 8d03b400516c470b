//! Priority resource client

use jiratools_core::error::ApiError;
use jiratools_core::types::Priority;

use crate::client::JiraClient;

impl JiraClient {
    /// Fetch a priority by id.
    pub async fn get_priority(&self, priority_id: &str) -> Result<Priority, ApiError> {
        let response = self
            .get(&format!("priority/{}", urlencoding::encode(priority_id)), &[])
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("name"))
    }

    /// Fetch all priorities defined on the site.
    pub async fn get_priorities(&self) -> Result<Vec<Priority>, ApiError> {
        let response = self.get("priority", &[]).await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("priorities"))
    }
}
