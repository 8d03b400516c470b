//! Issue commands

pub mod create;
pub mod get;
pub mod search;
pub mod transition;
pub mod transitions;

use colored::Colorize;
use serde_json::Value;

use jiratools_core::adf::from_adf;
use jiratools_core::types::Issue;

use crate::prelude::{println, *};

/// Issue commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Create a new Jira issue and return the unique key
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Fetch details of a specific issue by its key, e.g. DEMO-1234
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Fetch a list of issue keys matching JQL
    #[clap(name = "search")]
    Search(search::SearchOptions),

    /// Fetch transitions available for an issue by its key
    #[clap(name = "transitions", alias = "get-transitions")]
    Transitions(transitions::TransitionsOptions),

    /// Transition an issue by transition id or name
    #[clap(name = "transition")]
    Transition(transition::TransitionOptions),
}

/// Run issue commands
pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running issue command...");
    }

    match cmd {
        Commands::Create(options) => create::handler(options, &global).await,
        Commands::Get(options) => get::handler(options, &global).await,
        Commands::Search(options) => search::handler(options, &global).await,
        Commands::Transitions(options) => transitions::handler(options, &global).await,
        Commands::Transition(options) => transition::handler(options, &global).await,
    }
}

/// Display an issue's details as a formatted CLI table.
fn display_issue(issue: &Issue) {
    std::println!(
        "\n{} - {}\n",
        issue.key.bold().cyan(),
        issue.fields.summary.bright_white()
    );

    let mut table = new_table();

    if let Some(status) = &issue.fields.status {
        table.add_row(prettytable::row![
            "Status".bold().cyan(),
            status.name.green().to_string()
        ]);
    }

    if let Some(issue_type) = &issue.fields.issuetype {
        table.add_row(prettytable::row![
            "Type".bold().cyan(),
            issue_type.name.bright_blue().to_string()
        ]);
    }

    if let Some(priority) = &issue.fields.priority {
        table.add_row(prettytable::row![
            "Priority".bold().cyan(),
            priority.name.bright_yellow().to_string()
        ]);
    }

    let assignee = issue
        .fields
        .assignee
        .as_ref()
        .and_then(|user| user.label())
        .unwrap_or("Unassigned");
    table.add_row(prettytable::row![
        "Assignee".bold().cyan(),
        assignee.bright_magenta().to_string()
    ]);

    if let Some(created) = &issue.fields.created {
        table.add_row(prettytable::row![
            "Created".bold().cyan(),
            created.bright_black().to_string()
        ]);
    }

    if let Some(updated) = &issue.fields.updated {
        table.add_row(prettytable::row![
            "Updated".bold().cyan(),
            updated.bright_black().to_string()
        ]);
    }

    table.printstd();

    if let Some(description) = render_description(issue.fields.description.as_ref()) {
        std::println!("\n{}:", "Description".bold().cyan());
        std::println!("{}", description);
    }

    if !issue.fields.labels.is_empty() {
        std::println!(
            "\n{}: {}",
            "Labels".bold().cyan(),
            issue.fields.labels.join(", ").bright_green()
        );
    }

    std::println!();
}

/// Descriptions arrive as a plain string or an ADF document.
fn render_description(description: Option<&Value>) -> Option<String> {
    let rendered = match description? {
        Value::String(text) => text.clone(),
        value => from_adf(value),
    };

    if rendered.trim().is_empty() {
        None
    } else {
        Some(rendered.trim_end().to_string())
    }
}
