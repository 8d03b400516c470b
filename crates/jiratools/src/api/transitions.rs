//! Transition resource client
//!
//! Workflow transitions are applied by id; [`JiraClient::apply_transition_by_name`]
//! resolves a display name first. Name matching is case-sensitive and
//! exact, and an unmatched name is an error rather than a silent no-op.

use reqwest::Method;

use jiratools_core::error::ApiError;
use jiratools_core::fields::transition_payload;
use jiratools_core::types::{Transition, TransitionList};

use crate::client::JiraClient;

impl JiraClient {
    /// List the transitions currently available for an issue.
    pub async fn get_transitions(&self, issue_key: &str) -> Result<Vec<Transition>, ApiError> {
        let response = self
            .get(
                &format!("issue/{}/transitions", urlencoding::encode(issue_key)),
                &[],
            )
            .await?;
        let list: TransitionList = serde_json::from_value(response.body)
            .map_err(|_| ApiError::MissingField("transitions"))?;
        Ok(list.transitions)
    }

    /// Apply a transition by id, optionally attaching a comment.
    pub async fn apply_transition(
        &self,
        issue_key: &str,
        transition_id: &str,
        comment: Option<&str>,
    ) -> Result<(), ApiError> {
        let payload = transition_payload(transition_id, comment);
        self.send(
            Method::POST,
            &format!("issue/{}/transitions", urlencoding::encode(issue_key)),
            &payload,
        )
        .await?;
        Ok(())
    }

    /// Apply a transition by its display name: fetch the available
    /// transitions, match the name exactly, and delegate to
    /// [`Self::apply_transition`].
    pub async fn apply_transition_by_name(
        &self,
        issue_key: &str,
        name: &str,
        comment: Option<&str>,
    ) -> Result<(), ApiError> {
        let transitions = self.get_transitions(issue_key).await?;
        let transition = transitions
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ApiError::UnknownTransition(name.to_string()))?;
        self.apply_transition(issue_key, &transition.id, comment)
            .await
    }
}
