use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,

    /// Get a user by ID
    Get {
        /// User ID
        id: String,
    },
}
