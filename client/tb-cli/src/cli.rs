use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tb")]
#[command(about = "Ticket board client: projects, tickets, comments and a kanban board")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides gateway.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
