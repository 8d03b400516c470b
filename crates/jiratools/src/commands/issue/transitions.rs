//! List available transitions for an issue

use clap::Args;
use colored::Colorize;

use crate::prelude::{println, *};

/// Fetch transitions available for an issue by its key
#[derive(Args, Debug, Clone)]
pub struct TransitionsOptions {
    /// The issue to get available transitions for
    pub issue_key: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// CLI handler for the transitions command
pub async fn handler(options: TransitionsOptions, global: &crate::Global) -> Result<()> {
    let client = crate::commands::connect(global)?;

    let transitions = client.get_transitions(&options.issue_key).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&transitions)?);
        return Ok(());
    }

    if transitions.is_empty() {
        println!("{}", "No transitions available.".bright_black());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Name".bold().cyan(),
        "To".bold().cyan()
    ]);

    for transition in &transitions {
        let target = transition
            .to
            .as_ref()
            .map(|status| status.name.as_str())
            .unwrap_or("-");
        table.add_row(prettytable::row![
            transition.id.green().to_string(),
            transition.name.bright_white().to_string(),
            target.bright_blue().to_string()
        ]);
    }

    table.printstd();

    Ok(())
}
