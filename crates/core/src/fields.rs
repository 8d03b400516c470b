//! Request payload builders
//!
//! Pure assembly of the nested JSON bodies Jira expects. The shell hands
//! these to the HTTP client verbatim; nothing here touches the network.

use serde_json::{json, Map, Value};

use crate::adf::to_adf;

/// A reference to a Jira resource, either by numeric id or by its
/// key/name.
///
/// Jira accepts `{"id": "10001"}` and `{"key": "DEMO"}` (or `{"name":
/// "Bug"}` for issue types) interchangeably in request payloads; which
/// field to use depends on whether the caller passed a numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRef {
    ById(String),
    ByKey(String),
}

impl ResourceRef {
    /// Classify a user-supplied value: all-digit strings are ids,
    /// everything else is a key/name.
    pub fn parse(value: &str) -> Self {
        if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
            ResourceRef::ById(value.to_string())
        } else {
            ResourceRef::ByKey(value.to_string())
        }
    }

    /// Render as the single-field object Jira expects, using `key_field`
    /// (`"key"`, `"name"`, ...) for the by-key form.
    pub fn to_value(&self, key_field: &str) -> Value {
        match self {
            ResourceRef::ById(id) => json!({ "id": id }),
            ResourceRef::ByKey(key) => json!({ key_field: key }),
        }
    }
}

/// Build the `{"fields": {...}}` payload for the simple issue-create path.
///
/// Explicit fields win over colliding entries in `custom`: the custom map
/// is merged first and `project`, `summary`, `description`, and
/// `issuetype` are written on top of it. The description travels as an
/// ADF document. `time_tracking` (e.g. `{"originalEstimate": "1d 2h"}`)
/// is included only when present.
pub fn simple_create_fields(
    project: &str,
    summary: &str,
    description: &str,
    issue_type: &str,
    time_tracking: Option<Value>,
    custom: Option<Value>,
) -> Value {
    let mut fields = match custom {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    fields.insert(
        "project".to_string(),
        ResourceRef::parse(project).to_value("key"),
    );
    fields.insert("summary".to_string(), json!(summary));
    fields.insert("description".to_string(), to_adf(description));
    fields.insert(
        "issuetype".to_string(),
        ResourceRef::parse(issue_type).to_value("name"),
    );

    if let Some(tracking) = time_tracking.filter(|t| !is_empty_value(t)) {
        fields.insert("timetracking".to_string(), tracking);
    }

    json!({ "fields": fields })
}

/// Time spent on a worklog entry.
///
/// Jira takes either a raw second count or its `"1d 2h"` shorthand, under
/// two different field names, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSpent {
    /// Sent as `timeSpentSeconds`
    Seconds(u64),
    /// Sent as `timeSpent`, e.g. `"1d 2h"`
    Duration(String),
}

impl TimeSpent {
    pub fn field_name(&self) -> &'static str {
        match self {
            TimeSpent::Seconds(_) => "timeSpentSeconds",
            TimeSpent::Duration(_) => "timeSpent",
        }
    }

    fn to_value(&self) -> Value {
        match self {
            TimeSpent::Seconds(seconds) => json!(seconds),
            TimeSpent::Duration(duration) => json!(duration),
        }
    }
}

/// Build a worklog create/update payload: the time-spent field plus any
/// additional options, with the time field taking precedence on
/// collision.
pub fn worklog_fields(time_spent: &TimeSpent, options: Option<Value>) -> Value {
    let mut fields = match options {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    fields.insert(time_spent.field_name().to_string(), time_spent.to_value());

    Value::Object(fields)
}

/// Build a comment create/update payload.
///
/// The text is carried as an ADF document; a visibility restriction (e.g.
/// `{"type": "role", "value": "Administrators"}`) is merged in only when
/// one is given and non-empty.
pub fn comment_payload(text: &str, visibility: Option<Value>) -> Value {
    let mut payload = json!({ "body": to_adf(text) });

    if let Some(visibility) = visibility.filter(|v| !is_empty_value(v)) {
        payload["visibility"] = visibility;
    }

    payload
}

/// Build a transition-apply payload: `{"transition": {"id": ...}}` plus,
/// when a comment is given, the comment-add update block with an
/// ADF-encoded body.
pub fn transition_payload(transition_id: &str, comment: Option<&str>) -> Value {
    let mut payload = json!({
        "transition": { "id": transition_id }
    });

    if let Some(text) = comment.filter(|text| !text.is_empty()) {
        payload["update"] = json!({
            "comment": [{ "add": { "body": to_adf(text) } }]
        });
    }

    payload
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_ref_numeric_is_id() {
        assert_eq!(
            ResourceRef::parse("10001"),
            ResourceRef::ById("10001".to_string())
        );
        assert_eq!(
            ResourceRef::parse("DEMO"),
            ResourceRef::ByKey("DEMO".to_string())
        );
        // Mixed content is a key, not an id
        assert_eq!(
            ResourceRef::parse("DEMO-1"),
            ResourceRef::ByKey("DEMO-1".to_string())
        );
    }

    #[test]
    fn test_resource_ref_rendering() {
        assert_eq!(
            ResourceRef::parse("10001").to_value("key"),
            serde_json::json!({ "id": "10001" })
        );
        assert_eq!(
            ResourceRef::parse("Bug").to_value("name"),
            serde_json::json!({ "name": "Bug" })
        );
    }

    #[test]
    fn test_simple_create_fields_by_key() {
        // Arrange / Act
        let data = simple_create_fields("DEMO", "A title", "A description", "Bug", None, None);

        // Assert: non-numeric values land under key/name
        assert_eq!(data["fields"]["project"], json!({ "key": "DEMO" }));
        assert_eq!(data["fields"]["issuetype"], json!({ "name": "Bug" }));
        assert_eq!(data["fields"]["summary"], "A title");
        // Description is an ADF document, not a bare string
        assert_eq!(data["fields"]["description"]["type"], "doc");
        assert_eq!(
            data["fields"]["description"]["content"][0]["content"][0]["text"],
            "A description"
        );
    }

    #[test]
    fn test_simple_create_fields_by_id() {
        let data = simple_create_fields("10001", "A title", "", "3", None, None);

        // Numeric strings land under id for both project and issuetype
        assert_eq!(data["fields"]["project"], json!({ "id": "10001" }));
        assert_eq!(data["fields"]["issuetype"], json!({ "id": "3" }));
    }

    #[test]
    fn test_simple_create_fields_custom_merge_precedence() {
        // Arrange: a custom map that collides with an explicit field
        let custom = json!({
            "labels": ["triage"],
            "summary": "should be overridden"
        });

        // Act
        let data = simple_create_fields("DEMO", "Real title", "", "Bug", None, Some(custom));

        // Assert: explicit fields override custom ones; the rest survive
        assert_eq!(data["fields"]["summary"], "Real title");
        assert_eq!(data["fields"]["labels"], json!(["triage"]));
    }

    #[test]
    fn test_simple_create_fields_time_tracking() {
        let tracking = json!({ "originalEstimate": "1d 2h" });
        let data = simple_create_fields("DEMO", "T", "", "Bug", Some(tracking), None);

        assert_eq!(
            data["fields"]["timetracking"],
            json!({ "originalEstimate": "1d 2h" })
        );

        // An empty map is dropped entirely
        let data = simple_create_fields("DEMO", "T", "", "Bug", Some(json!({})), None);
        assert!(data["fields"].get("timetracking").is_none());
    }

    #[test]
    fn test_worklog_fields_seconds() {
        let data = worklog_fields(&TimeSpent::Seconds(3600), None);

        assert_eq!(data, json!({ "timeSpentSeconds": 3600 }));
        assert!(data.get("timeSpent").is_none());
    }

    #[test]
    fn test_worklog_fields_duration() {
        let data = worklog_fields(&TimeSpent::Duration("1h".to_string()), None);

        assert_eq!(data, json!({ "timeSpent": "1h" }));
        assert!(data.get("timeSpentSeconds").is_none());
    }

    #[test]
    fn test_worklog_fields_options_merge() {
        let options = json!({ "comment": "standup", "timeSpent": "bogus" });
        let data = worklog_fields(&TimeSpent::Duration("30m".to_string()), Some(options));

        // The typed time field wins over a colliding option
        assert_eq!(data["timeSpent"], "30m");
        assert_eq!(data["comment"], "standup");
    }

    #[test]
    fn test_comment_payload_without_visibility() {
        let payload = comment_payload("looks good", None);

        assert_eq!(payload["body"]["type"], "doc");
        assert!(payload.get("visibility").is_none());
    }

    #[test]
    fn test_comment_payload_with_visibility() {
        let visibility = json!({ "type": "role", "value": "Administrators" });
        let payload = comment_payload("internal note", Some(visibility.clone()));

        assert_eq!(payload["visibility"], visibility);
    }

    #[test]
    fn test_comment_payload_empty_visibility_dropped() {
        let payload = comment_payload("note", Some(json!({})));
        assert!(payload.get("visibility").is_none());
    }

    #[test]
    fn test_transition_payload_without_comment() {
        let payload = transition_payload("21", None);

        assert_eq!(payload, json!({ "transition": { "id": "21" } }));
    }

    #[test]
    fn test_transition_payload_with_comment() {
        // Act
        let payload = transition_payload("31", Some("closing"));

        // Assert: the comment rides along as an ADF add-update block
        assert_eq!(payload["transition"]["id"], "31");
        let body = &payload["update"]["comment"][0]["add"]["body"];
        assert_eq!(body["type"], "doc");
        assert_eq!(body["content"][0]["content"][0]["text"], "closing");
    }

    #[test]
    fn test_transition_payload_blank_comment_dropped() {
        let payload = transition_payload("31", Some(""));
        assert!(payload.get("update").is_none());
    }
}
