//! Fetch a comment on an issue

use clap::Args;
use colored::Colorize;
use serde_json::Value;

use jiratools_core::adf::from_adf;

use crate::prelude::{println, *};

/// Fetch a specific comment on an issue
#[derive(Args, Debug, Clone)]
pub struct GetOptions {
    /// The issue the comment belongs to (e.g. DEMO-1234)
    pub issue_key: String,

    /// The id of the comment to retrieve
    pub comment_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// CLI handler for the comment get command
pub async fn handler(options: GetOptions, global: &crate::Global) -> Result<()> {
    let client = crate::commands::connect(global)?;

    let comment = client
        .get_comment(&options.issue_key, &options.comment_id)
        .await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&comment)?);
        return Ok(());
    }

    let author = comment
        .author
        .as_ref()
        .and_then(|user| user.label())
        .unwrap_or("Unknown");
    let created = comment.created.as_deref().unwrap_or("-");

    println!(
        "{} {}",
        format!("[{created}]").blue(),
        author.magenta().bold()
    );

    let body = match &comment.body {
        Value::String(text) => text.clone(),
        value => from_adf(value),
    };
    println!("{}", body.trim_end());

    Ok(())
}
