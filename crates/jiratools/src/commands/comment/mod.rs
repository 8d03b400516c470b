//! Comment commands

pub mod create;
pub mod get;

use crate::prelude::{println, *};

/// Comment commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Add a comment to an issue
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Fetch a specific comment on an issue
    #[clap(name = "get")]
    Get(get::GetOptions),
}

/// Run comment commands
pub async fn run(cmd: Commands, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running comment command...");
    }

    match cmd {
        Commands::Create(options) => create::handler(options, &global).await,
        Commands::Get(options) => get::handler(options, &global).await,
    }
}
