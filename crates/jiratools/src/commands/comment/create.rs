//! Add a comment to an issue

use clap::Args;
use colored::Colorize;
use serde_json::json;

use crate::prelude::{println, *};

/// Add a comment to an issue
#[derive(Args, Debug, Clone)]
pub struct CreateOptions {
    /// The issue to comment on (e.g. DEMO-1234)
    pub issue_key: String,

    /// The comment text; blank lines separate paragraphs
    pub text: String,

    /// Restrict visibility to a project role (e.g. Administrators)
    #[arg(long)]
    pub role: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// CLI handler for the comment create command
pub async fn handler(options: CreateOptions, global: &crate::Global) -> Result<()> {
    let client = crate::commands::connect(global)?;

    let visibility = options
        .role
        .as_ref()
        .map(|role| json!({ "type": "role", "value": role }));

    let comment = client
        .add_comment(&options.issue_key, &options.text, visibility)
        .await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
    } else {
        println!(
            "Comment {} added to {}",
            comment.id.bold(),
            options.issue_key.green().bold()
        );
    }

    Ok(())
}
