//! Typed errors for Jira API operations
//!
//! Every resource operation returns `Result<T, ApiError>`; the HTTP shell
//! maps response status codes through [`ApiError::from_status`] and callers
//! decide how to surface the failure. Jira reports failures in a body of
//! the shape `{"errorMessages": [...], "errors": {"field": "message"}}`;
//! [`error_messages`] flattens both into a single list.

use serde_json::Value;

/// Failure of a Jira API operation.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// 400, the request payload was rejected
    #[error("invalid request: {0}")]
    Validation(String),

    /// 401
    #[error("request not authenticated: {0}")]
    Authentication(String),

    /// 403
    #[error("permission denied: {0}")]
    Permission(String),

    /// 404
    #[error("resource not found: {0}")]
    NotFound(String),

    /// 409, format not supported or name already in use
    #[error("conflict: {0}")]
    Conflict(String),

    /// 412, If-Match header does not match server
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Any other non-success status
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// The transport gave up waiting for a response
    #[error("connection to the Jira API timed out")]
    Timeout,

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),

    /// `apply_transition_by_name` found no transition with the given name
    #[error("no transition named `{0}` is available for this issue")]
    UnknownTransition(String),

    /// A 2xx body did not carry the field the operation promises
    #[error("response body missing expected field `{0}`")]
    MissingField(&'static str),
}

impl ApiError {
    /// Map an HTTP error status and its extracted messages to a variant.
    pub fn from_status(status: u16, messages: Vec<String>) -> Self {
        let message = if messages.is_empty() {
            status_text(status).to_string()
        } else {
            messages.join(". ")
        };

        match status {
            400 => ApiError::Validation(message),
            401 => ApiError::Authentication(message),
            403 => ApiError::Permission(message),
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            412 => ApiError::Precondition(message),
            _ => ApiError::Status { status, message },
        }
    }

    /// The HTTP status this error was mapped from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation(_) => Some(400),
            ApiError::Authentication(_) => Some(401),
            ApiError::Permission(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Conflict(_) => Some(409),
            ApiError::Precondition(_) => Some(412),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Descriptive text for the HTTP status codes the Jira API returns.
pub fn status_text(code: u16) -> &'static str {
    match code {
        200 => "OK",
        400 => "Invalid request",
        401 => "Request not authenticated",
        403 => "Permission denied",
        404 => "Resource not found",
        409 => "Format is not supported or name already in use",
        412 => "If-Match header is not null and does not match server",
        _ => "Undefined error",
    }
}

/// Extract the human-readable messages from a Jira error body.
///
/// Collects every entry of `errorMessages` plus each `errors` field as a
/// `field: message` pair. A body of any other shape yields an empty list.
pub fn error_messages(body: &Value) -> Vec<String> {
    let mut messages = Vec::new();

    if let Some(error_messages) = body.get("errorMessages").and_then(Value::as_array) {
        for msg in error_messages {
            if let Some(text) = msg.as_str() {
                messages.push(text.to_string());
            }
        }
    }

    if let Some(errors) = body.get("errors").and_then(Value::as_object) {
        for (field, error) in errors {
            if let Some(text) = error.as_str() {
                messages.push(format!("{field}: {text}"));
            }
        }
    }

    messages
}
