//! Connection configuration
//!
//! Settings are layered: an optional YAML file supplies defaults, the
//! `JIRA_*` environment variables and command-line flags override it
//! (flags and env are resolved together by clap). The request timeout is
//! an explicit knob rather than whatever the transport defaults to.

use std::path::Path;

use serde::Deserialize;

use crate::prelude::*;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved connection settings for one Jira site.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub username: String,
    pub api_token: String,
    pub timeout_secs: u64,
}

/// Optional YAML config file, e.g.:
///
/// ```yaml
/// url: https://example.atlassian.net
/// username: me@example.com
/// token: abc123
/// timeout_secs: 10
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub username: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;
        serde_yaml::from_str(&raw)
            .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))
    }
}

impl JiraConfig {
    /// Resolve the effective configuration from the global arguments.
    pub fn resolve(global: &crate::Global) -> Result<Self> {
        let file = match &global.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let base_url = global
            .url
            .clone()
            .or(file.url)
            .ok_or_else(|| eyre!("Jira API URL must be provided (--url, JIRA_BASE_URL, or config file)"))?;
        let username = global
            .username
            .clone()
            .or(file.username)
            .ok_or_else(|| eyre!("Username must be provided (--username, JIRA_USERNAME, or config file)"))?;
        let api_token = global
            .token
            .clone()
            .or(file.token)
            .ok_or_else(|| eyre!("API token must be provided (--token, JIRA_API_TOKEN, or config file)"))?;

        Ok(Self {
            base_url,
            username,
            api_token,
            timeout_secs: global
                .timeout
                .or(file.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}
