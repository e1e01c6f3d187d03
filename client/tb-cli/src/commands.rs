use crate::{
    board_commands::BoardCommands, comment_commands::CommentCommands, find_commands::FindCommands,
    project_commands::ProjectCommands, ticket_commands::TicketCommands,
    user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// user, admin, developer or tester
        #[arg(long, default_value = "user")]
        role: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Ticket operations
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },

    /// Comment operations
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },

    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Kanban board
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Interactive search: one query per stdin line
    Find {
        #[command(subcommand)]
        action: FindCommands,
    },
}
