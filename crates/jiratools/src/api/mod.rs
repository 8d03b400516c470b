//! Resource clients for the Jira REST API
//!
//! Each module extends [`crate::client::JiraClient`] with the operations
//! of one resource. Paths are relative to the `rest/api/3` root; path
//! segments built from user input are percent-encoded here, and every
//! operation maps its expected status codes to a typed result.

pub mod comments;
pub mod issue_types;
pub mod issues;
pub mod permissions;
pub mod priorities;
pub mod projects;
pub mod statuses;
pub mod transitions;
pub mod users;
pub mod worklogs;
