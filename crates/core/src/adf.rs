//! Conversion between Atlassian Document Format and plain text
//!
//! ADF is the JSON tree representation of rich text used by the Jira Cloud
//! API: a `doc` node holds `paragraph` nodes, which hold `text` leaves and
//! `hardBreak`/`rule` markers. Jira requires comment and description bodies
//! in this format, so everything the user types goes through [`to_adf`] on
//! the way out and [`from_adf`] on the way back in.

use serde_json::{json, Value};

/// Render an ADF node (or sequence of nodes) to plain text.
///
/// Depth-first fold over the tree. A node with children concatenates their
/// rendering and, when it is a `paragraph`, appends one newline for the
/// whole sequence. `text` leaves yield their text, a `hardBreak` yields a
/// newline, and a `rule` yields a `---` separator line. Unrecognized nodes
/// render as nothing rather than failing.
pub fn from_adf(node: &Value) -> String {
    match node {
        Value::Array(items) => items.iter().map(from_adf).collect(),
        Value::Object(_) => {
            if let Some(children) = node.get("content").and_then(Value::as_array) {
                if !children.is_empty() {
                    let mut text: String = children.iter().map(from_adf).collect();
                    if node.get("type").and_then(Value::as_str) == Some("paragraph") {
                        text.push('\n');
                    }
                    return text;
                }
            }
            if let Some(text) = node.get("text").and_then(Value::as_str) {
                return text.to_string();
            }
            match node.get("type").and_then(Value::as_str) {
                Some("hardBreak") => "\n".to_string(),
                Some("rule") => "\n---\n".to_string(),
                _ => String::new(),
            }
        }
        _ => String::new(),
    }
}

/// Build an ADF document from plain text.
///
/// The text is split on blank lines (`\n\n`); each segment becomes one
/// `paragraph` node. A non-empty segment is carried as a single `text`
/// child (single newlines inside it stay part of the text), while an
/// empty segment becomes a lone `hardBreak`.
pub fn to_adf(text: &str) -> Value {
    let paragraphs: Vec<Value> = text
        .split("\n\n")
        .map(|segment| {
            let child = if segment.is_empty() {
                json!({ "type": "hardBreak" })
            } else {
                json!({ "type": "text", "text": segment })
            };
            json!({ "type": "paragraph", "content": [child] })
        })
        .collect();

    json!({
        "type": "doc",
        "version": 1,
        "content": paragraphs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_adf_single_paragraph() {
        // Arrange / Act: convert a one-line string
        let doc = to_adf("Hello world");

        // Assert: doc envelope with one paragraph holding one text node
        assert_eq!(doc["type"], "doc");
        assert_eq!(doc["version"], 1);
        let content = doc["content"].as_array().unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["type"], "paragraph");
        let children = content[0]["content"].as_array().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0]["type"], "text");
        assert_eq!(children[0]["text"], "Hello world");
    }

    #[test]
    fn test_to_adf_two_paragraphs() {
        // Arrange / Act: a blank line separates paragraphs
        let doc = to_adf("A\n\nB");

        // Assert: exactly two paragraphs, one text child each
        let content = doc["content"].as_array().unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0]["content"][0]["text"], "A");
        assert_eq!(content[1]["content"][0]["text"], "B");
    }

    #[test]
    fn test_to_adf_empty_string() {
        // Act: the empty string still produces a well-formed document
        let doc = to_adf("");

        // Assert: one paragraph containing a single hardBreak
        let content = doc["content"].as_array().unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["type"], "paragraph");
        let children = content[0]["content"].as_array().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0]["type"], "hardBreak");
    }

    #[test]
    fn test_to_adf_keeps_single_newlines_in_text() {
        // A single newline is not a paragraph boundary
        let doc = to_adf("line one\nline two");

        let content = doc["content"].as_array().unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["content"][0]["text"], "line one\nline two");
    }

    #[test]
    fn test_from_adf_paragraphs() {
        let doc = json!({
            "type": "doc",
            "version": 1,
            "content": [
                { "type": "paragraph", "content": [{ "type": "text", "text": "A" }] },
                { "type": "paragraph", "content": [{ "type": "text", "text": "B" }] },
            ]
        });

        // Each paragraph contributes exactly one trailing newline
        assert_eq!(from_adf(&doc), "A\nB\n");
    }

    #[test]
    fn test_from_adf_hard_break() {
        let doc = json!({
            "type": "doc",
            "content": [
                {
                    "type": "paragraph",
                    "content": [
                        { "type": "text", "text": "before" },
                        { "type": "hardBreak" },
                        { "type": "text", "text": "after" },
                    ]
                },
            ]
        });

        assert_eq!(from_adf(&doc), "before\nafter\n");
    }

    #[test]
    fn test_from_adf_rule() {
        let doc = json!({
            "type": "doc",
            "content": [
                { "type": "paragraph", "content": [{ "type": "text", "text": "above" }] },
                { "type": "rule" },
            ]
        });

        assert_eq!(from_adf(&doc), "above\n\n---\n");
    }

    #[test]
    fn test_from_adf_unknown_node_renders_nothing() {
        let doc = json!({
            "type": "doc",
            "content": [
                { "type": "mediaGroup" },
                { "type": "paragraph", "content": [{ "type": "text", "text": "kept" }] },
            ]
        });

        assert_eq!(from_adf(&doc), "kept\n");
    }

    #[test]
    fn test_from_adf_sequence() {
        // A bare array of nodes folds element-wise
        let nodes = json!([
            { "type": "text", "text": "a" },
            { "type": "text", "text": "b" },
        ]);

        assert_eq!(from_adf(&nodes), "ab");
    }

    #[test]
    fn test_round_trip_plain_text() {
        // Arrange: strings without paragraph separators
        for input in ["hello", "one\ntwo", "trailing space "] {
            // Act
            let output = from_adf(&to_adf(input));

            // Assert: reproduced up to the single trailing paragraph newline
            assert_eq!(output, format!("{input}\n"));
        }
    }

    #[test]
    fn test_round_trip_empty_string() {
        // The empty document renders as its hardBreak plus the paragraph newline
        assert_eq!(from_adf(&to_adf("")), "\n\n");
    }
}
