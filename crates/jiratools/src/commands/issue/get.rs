//! Fetch a Jira issue

use clap::Args;

use crate::prelude::{println, *};

/// Fetch details of a specific issue by its key
#[derive(Args, Debug, Clone)]
pub struct GetOptions {
    /// Issue key (e.g. DEMO-1234)
    #[clap(env = "JIRA_ISSUE_KEY")]
    pub issue_key: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// CLI handler for the get command
pub async fn handler(options: GetOptions, global: &crate::Global) -> Result<()> {
    let client = crate::commands::connect(global)?;

    let issue = client.get_issue(&options.issue_key).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        super::display_issue(&issue);
    }

    Ok(())
}
