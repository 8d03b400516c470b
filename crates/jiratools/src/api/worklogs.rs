//! Worklog resource client

use reqwest::Method;
use serde_json::Value;

use jiratools_core::error::ApiError;
use jiratools_core::fields::{worklog_fields, TimeSpent};
use jiratools_core::types::{Worklog, WorklogList};

use crate::client::JiraClient;

impl JiraClient {
    /// Record time spent on an issue. Seconds and duration shorthand
    /// (`"1d 2h"`) travel under different field names; the [`TimeSpent`]
    /// union picks the right one.
    pub async fn add_worklog(
        &self,
        issue_key: &str,
        time_spent: &TimeSpent,
        options: Option<Value>,
    ) -> Result<Worklog, ApiError> {
        let payload = worklog_fields(time_spent, options);
        let response = self
            .send(
                Method::POST,
                &format!("issue/{}/worklog", urlencoding::encode(issue_key)),
                &payload,
            )
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("id"))
    }

    /// Update an existing worklog entry.
    pub async fn update_worklog(
        &self,
        issue_key: &str,
        worklog_id: &str,
        time_spent: &TimeSpent,
        options: Option<Value>,
    ) -> Result<Worklog, ApiError> {
        let payload = worklog_fields(time_spent, options);
        let response = self
            .send(
                Method::PUT,
                &format!(
                    "issue/{}/worklog/{}",
                    urlencoding::encode(issue_key),
                    urlencoding::encode(worklog_id)
                ),
                &payload,
            )
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("id"))
    }

    /// Fetch a single worklog entry.
    pub async fn get_worklog(&self, issue_key: &str, worklog_id: &str) -> Result<Worklog, ApiError> {
        let response = self
            .get(
                &format!(
                    "issue/{}/worklog/{}",
                    urlencoding::encode(issue_key),
                    urlencoding::encode(worklog_id)
                ),
                &[],
            )
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("id"))
    }

    /// Fetch all worklog entries for an issue.
    pub async fn get_worklogs(&self, issue_key: &str) -> Result<WorklogList, ApiError> {
        let response = self
            .get(
                &format!("issue/{}/worklog", urlencoding::encode(issue_key)),
                &[],
            )
            .await?;
        serde_json::from_value(response.body).map_err(|_| ApiError::MissingField("worklogs"))
    }

    /// Delete a worklog entry.
    pub async fn delete_worklog(&self, issue_key: &str, worklog_id: &str) -> Result<(), ApiError> {
        self.send(
            Method::DELETE,
            &format!(
                "issue/{}/worklog/{}",
                urlencoding::encode(issue_key),
                urlencoding::encode(worklog_id)
            ),
            &Value::Null,
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{basic_auth, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use jiratools_core::fields::TimeSpent;

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
    async fn test_add_worklog_seconds_field_name() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server.uri());

        // An integer count must travel as timeSpentSeconds, never timeSpent
        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue/DEMO-1/worklog"))
            .and(basic_auth("test_user", "test_token"))
            .and(body_json(serde_json::json!({ "timeSpentSeconds": 3600 })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "100",
                "timeSpentSeconds": 3600
            })))
            .mount(&mock_server)
            .await;

        let worklog = client
            .add_worklog("DEMO-1", &TimeSpent::Seconds(3600), None)
            .await
            .unwrap();
        assert_eq!(worklog.time_spent_seconds, Some(3600));
    }

    #[tokio::test]
    async fn test_add_worklog_duration_field_name() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/rest/api/3/issue/DEMO-1/worklog"))
            .and(body_json(serde_json::json!({ "timeSpent": "1h" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "101",
                "timeSpent": "1h"
            })))
            .mount(&mock_server)
            .await;

        let worklog = client
            .add_worklog("DEMO-1", &TimeSpent::Duration("1h".to_string()), None)
            .await
            .unwrap();
        assert_eq!(worklog.time_spent.as_deref(), Some("1h"));
    }

    #[tokio::test]
    async fn test_get_worklogs_envelope() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/rest/api/3/issue/DEMO-1/worklog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "startAt": 0,
                "maxResults": 20,
                "total": 1,
                "worklogs": [{ "id": "100", "timeSpent": "2h" }]
            })))
            .mount(&mock_server)
            .await;

        let list = client.get_worklogs("DEMO-1").await.unwrap();
        assert_eq!(list.total, Some(1));
        assert_eq!(list.worklogs[0].time_spent.as_deref(), Some("2h"));
    }
}
