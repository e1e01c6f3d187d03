use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Show tickets grouped into status columns
    Show {
        /// Only this project's tickets
        #[arg(long)]
        project_id: Option<String>,
    },

    /// Move a ticket between or within columns
    Move {
        ticket_id: String,

        /// Source column key
        #[arg(long)]
        from: String,

        /// Position in the source column
        #[arg(long, default_value_t = 0)]
        from_index: usize,

        /// Destination column key
        #[arg(long)]
        to: String,

        /// Position in the destination column
        #[arg(long, default_value_t = 0)]
        to_index: usize,

        #[arg(long)]
        project_id: Option<String>,
    },
}
