use clap::Subcommand;

#[derive(Subcommand)]
pub enum CommentCommands {
    /// List comments on a ticket
    List {
        /// Ticket ID
        ticket_id: String,
    },

    /// Comment on a ticket as the logged-in user
    Add {
        #[arg(long)]
        ticket_id: String,

        #[arg(long)]
        text: String,
    },
}
