use clap::Subcommand;

#[derive(Subcommand)]
pub enum TicketCommands {
    /// List all tickets
    List,

    /// Get a ticket by ID
    Get {
        /// Ticket ID
        id: String,
    },

    /// Create a new ticket (requires login)
    Create {
        #[arg(long)]
        project_id: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// low, medium or high
        #[arg(long, default_value = "medium")]
        priority: String,

        /// open, to_do, in_progress or done
        #[arg(long, default_value = "open")]
        status: String,

        /// Assignee user ID (repeatable)
        #[arg(long = "assignee")]
        assignees: Vec<String>,
    },

    /// Update ticket fields
    Update {
        /// Ticket ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        project_id: Option<String>,
    },

    /// Replace the assignees of a ticket
    Assign {
        /// Ticket ID
        id: String,

        /// User ID (repeatable)
        #[arg(long = "user-id")]
        user_ids: Vec<String>,
    },

    /// Change only the status of a ticket
    Status {
        /// Ticket ID
        id: String,

        /// open, to_do, in_progress or done
        status: String,
    },

    /// Delete a ticket
    Delete {
        /// Ticket ID
        id: String,
    },

    /// Search tickets
    Search {
        /// Search key
        key: String,
    },

    /// Tickets belonging to one project
    ForProject {
        /// Project ID
        project_id: String,
    },
}
