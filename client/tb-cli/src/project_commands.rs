use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,

    /// Get a project by ID
    Get {
        /// Project ID
        id: String,
    },

    /// Create a new project
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// Progress label, e.g. "Not Started"
        #[arg(long)]
        status: Option<String>,
    },

    /// Update a project
    Update {
        /// Project ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a project
    Delete {
        /// Project ID
        id: String,
    },

    /// Search projects
    Search {
        /// Search key
        key: String,
    },

    /// Add a user to the project team
    AddMember {
        /// Project ID
        id: String,

        #[arg(long)]
        user_id: String,
    },

    /// Remove a user from the project team
    RemoveMember {
        /// Project ID
        id: String,

        #[arg(long)]
        user_id: String,
    },
}
