//! Create a new Jira issue

use clap::Args;
use colored::Colorize;

use crate::prelude::{println, *};

/// Create a new Jira issue and return the unique key
#[derive(Args, Debug, Clone)]
pub struct CreateOptions {
    /// The project to add the issue to (key or numeric id)
    pub project: String,

    /// The title of the issue being created
    pub summary: String,

    /// The description for the issue being created
    #[arg(default_value = "")]
    pub description: String,

    /// The type of issue being created (name or numeric id)
    #[arg(long = "type", default_value = "Bug")]
    pub issue_type: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// CLI handler for the create command
pub async fn handler(options: CreateOptions, global: &crate::Global) -> Result<()> {
    let client = crate::commands::connect(global)?;

    let created = client
        .simple_create_issue(
            &options.project,
            &options.summary,
            &options.description,
            &options.issue_type,
            None,
            None,
        )
        .await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else {
        println!("Issue created: {}", created.key.green().bold());
    }

    Ok(())
}
