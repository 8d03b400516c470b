use clap::Parser;

use jiratools::commands;
use jiratools::prelude::*;
use jiratools::Global;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Console access to the Atlassian Jira REST API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Issue operations
    #[clap(subcommand)]
    Issue(commands::issue::Commands),

    /// Comment operations
    #[clap(subcommand)]
    Comment(commands::comment::Commands),

    /// Connection operations
    #[clap(subcommand)]
    Connection(commands::connection::Commands),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Issue(cmd) => commands::issue::run(cmd, app.global).await,
        SubCommands::Comment(cmd) => commands::comment::run(cmd, app.global).await,
        SubCommands::Connection(cmd) => commands::connection::run(cmd, app.global).await,
    }
}
