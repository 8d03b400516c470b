//! Apply a workflow transition to an issue

use clap::Args;
use colored::Colorize;

use crate::prelude::{println, *};

/// Transition an issue by its key using a transition id or name
#[derive(Args, Debug, Clone)]
pub struct TransitionOptions {
    /// The issue to transition (e.g. DEMO-1234)
    pub issue_key: String,

    /// The transition (by id or name) to apply
    pub transition: String,

    /// A comment to add to the issue upon transitioning
    pub comment: Option<String>,
}

/// CLI handler for the transition command
pub async fn handler(options: TransitionOptions, global: &crate::Global) -> Result<()> {
    let client = crate::commands::connect(global)?;
    let comment = options.comment.as_deref();

    // An all-digit argument is a transition id, anything else a name
    if options.transition.chars().all(|c| c.is_ascii_digit()) {
        client
            .apply_transition(&options.issue_key, &options.transition, comment)
            .await?;
    } else {
        client
            .apply_transition_by_name(&options.issue_key, &options.transition, comment)
            .await?;
    }

    println!(
        "Applied transition {} to issue {}",
        options.transition.bold(),
        options.issue_key.green().bold()
    );

    Ok(())
}
