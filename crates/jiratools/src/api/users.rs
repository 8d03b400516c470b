//! User resource client

use jiratools_core::error::ApiError;
use jiratools_core::types::User;

use crate::client::JiraClient;

impl JiraClient {
    /// Users assignable across multiple projects; `options` become query
    /// parameters (e.g. `projectKeys`).
    pub async fn get_assignable_users(
        &self,
        options: &[(&str, &str)],
    ) -> Result<Vec<User>, ApiError> {
        let response = self
            .get("user/assignable/multiProjectSearch", options)
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("users"))
    }

    /// Users assignable within a single project or issue.
    pub async fn get_assignable_users_for_project(
        &self,
        options: &[(&str, &str)],
    ) -> Result<Vec<User>, ApiError> {
        let response = self.get("user/assignable/search", options).await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("users"))
    }

    /// The authenticated user.
    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        let response = self.get("myself", &[]).await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("accountId"))
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{basic_auth, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::JiraClient;
    use crate::config::JiraConfig;

    fn test_client(base_url: &str) -> JiraClient {
        JiraClient::new(&JiraConfig {
            base_url: base_url.to_string(),
            username: "test_user".to_string(),
            api_token: "test_token".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_assignable_users_passes_query() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/rest/api/3/user/assignable/multiProjectSearch"))
            .and(query_param("projectKeys", "DEMO"))
            .and(basic_auth("test_user", "test_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "accountId": "abc123", "displayName": "Jane Doe" }
            ])))
            .mount(&mock_server)
            .await;

        let users = client
            .get_assignable_users(&[("projectKeys", "DEMO")])
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].label(), Some("Jane Doe"));
    }

    #[tokio::test]
    async fn test_get_current_user() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/rest/api/3/myself"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "accountId": "abc123",
                "displayName": "Test User",
                "emailAddress": "test@example.com"
            })))
            .mount(&mock_server)
            .await;

        let user = client.get_current_user().await.unwrap();
        assert_eq!(user.account_id.as_deref(), Some("abc123"));
    }
}
