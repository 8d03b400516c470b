//! Connection commands

use colored::Colorize;

use jiratools_core::error::status_text;

use crate::prelude::{eprintln, println, *};

/// Connection commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Test the connection to the Jira API
    #[clap(name = "test")]
    Test,
}

/// Run connection commands
pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running connection command...");
    }

    match cmd {
        Commands::Test => test_handler(&global).await,
    }
}

/// Perform a cheap authenticated request and report the outcome.
async fn test_handler(global: &crate::Global) -> Result<()> {
    let client = crate::commands::connect(global)?;

    match client.get_statuses().await {
        Ok(_) => {
            println!(
                "{} 200 - {}",
                "Response code:".green().bold(),
                status_text(200)
            );
            Ok(())
        }
        Err(err) => {
            if let Some(status) = err.status() {
                eprintln!(
                    "{} {} - {}",
                    "Response code:".red().bold(),
                    status,
                    status_text(status)
                );
            }
            Err(err.into())
        }
    }
}
