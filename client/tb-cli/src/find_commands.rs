use clap::Subcommand;

#[derive(Subcommand)]
pub enum FindCommands {
    /// Search tickets as you type
    Tickets,

    /// Search projects as you type
    Projects,
}
