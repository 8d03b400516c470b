//! Client library for the Atlassian Jira REST API
//!
//! Provides Jira REST API integration for issue management, comments,
//! transitions, worklogs, and project data. [`client::JiraClient`] owns
//! one authenticated connection; the [`api`] modules extend it with the
//! operations of each resource, and [`commands`] implements the console
//! front-end on top. Pure payload and document transformations live in
//! the `jiratools_core` crate.

use std::path::PathBuf;

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod prelude;

/// Connection arguments shared by every command.
#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// The URL of the Jira API to connect to
    #[clap(long, env = "JIRA_BASE_URL", global = true)]
    url: Option<String>,

    /// The username to authenticate with
    #[clap(long, env = "JIRA_USERNAME", global = true)]
    username: Option<String>,

    /// The API token (or password) to authenticate with
    #[clap(long, env = "JIRA_API_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Path to a YAML file supplying connection defaults
    #[clap(long, env = "JIRA_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[clap(long, env = "JIRA_TIMEOUT_SECS", global = true)]
    timeout: Option<u64>,

    /// Whether to display additional information.
    #[clap(long, env = "JIRA_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}
