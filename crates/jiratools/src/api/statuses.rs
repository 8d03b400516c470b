//! Status resource client
//!
//! The status search endpoint doubles as the connection test: it is cheap
//! and requires a valid authenticated session.

use serde_json::Value;

use jiratools_core::error::ApiError;

use crate::client::JiraClient;

impl JiraClient {
    /// Fetch the site's statuses (paged envelope as provided by Jira).
    pub async fn get_statuses(&self) -> Result<Value, ApiError> {
        let response = self.get("statuses/search", &[]).await?;
        Ok(response.body)
    }
}
