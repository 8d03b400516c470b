//! Permission resource client
//!
//! Permission envelopes vary by site configuration, so they pass through
//! as raw JSON rather than a fixed shape.

use serde_json::Value;

use jiratools_core::error::ApiError;

use crate::client::JiraClient;

impl JiraClient {
    /// Permissions granted to the authenticated user.
    pub async fn get_my_permissions(&self) -> Result<Value, ApiError> {
        let response = self.get("mypermissions", &[]).await?;
        Ok(response.body)
    }

    /// All permissions defined on the site.
    pub async fn get_all_permissions(&self) -> Result<Value, ApiError> {
        let response = self.get("permissions", &[]).await?;
        Ok(response.body)
    }
}
