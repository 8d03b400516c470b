//! Console commands
//!
//! One module per command group. Handlers resolve the connection
//! settings, call the resource clients, and render the result; every
//! failure propagates as a report and exits non-zero.

pub mod comment;
pub mod connection;
pub mod issue;

use crate::client::JiraClient;
use crate::config::JiraConfig;
use crate::prelude::*;

/// Resolve configuration from the global arguments and build an
/// authenticated client.
pub fn connect(global: &crate::Global) -> Result<JiraClient> {
    let config = JiraConfig::resolve(global)?;
    Ok(JiraClient::new(&config)?)
}
