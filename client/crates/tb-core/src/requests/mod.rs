pub mod credentials;
pub mod new_comment;
pub mod new_project;
pub mod new_ticket;
pub mod project_update;
pub mod sign_up_request;
pub mod status_update;
pub mod team_member_change;
pub mod ticket_update;

/// Shown when a ticket form is missing a required field
pub const TICKET_REQUIRED_FIELDS: &str =
    "Please fill in all required fields (Title, Description, Project).";

/// Shown when a project form is missing a required field
pub const PROJECT_REQUIRED_FIELDS: &str = "Title and description are required.";

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
