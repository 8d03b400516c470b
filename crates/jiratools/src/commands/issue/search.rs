//! Search Jira issues with JQL

use clap::Args;
use colored::Colorize;

use crate::prelude::{println, *};

/// Fetch a list of issue keys matching JQL
#[derive(Args, Debug, Clone)]
#[command(after_help = "EXAMPLES:
  # All open issues in a project:
  jiratools issue search \"project = DEMO AND status = Open\"

  # Issues assigned to the current user:
  jiratools issue search \"assignee = currentUser()\"")]
pub struct SearchOptions {
    /// JQL used for searching
    #[clap(env = "JIRA_QUERY")]
    pub jql: String,

    /// Maximum number of results to return
    #[arg(short, long, default_value = "10")]
    pub limit: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// CLI handler for the search command
pub async fn handler(options: SearchOptions, global: &crate::Global) -> Result<()> {
    let client = crate::commands::connect(global)?;

    let results = client
        .search_issues(&options.jql, &["id", "key", "summary"], options.limit)
        .await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.issues.is_empty() {
        println!("{}", "No issues found.".bright_black());
        return Ok(());
    }

    for issue in &results.issues {
        println!(
            "{}: {}",
            issue.key.bold().cyan(),
            issue.fields.summary.trim()
        );
    }

    Ok(())
}
