pub mod error;
pub mod models;
pub mod requests;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::comment::Comment;
pub use models::priority::Priority;
pub use models::project::Project;
pub use models::ticket::Ticket;
pub use models::ticket_status::TicketStatus;
pub use models::user::User;
pub use models::user_role::UserRole;
pub use requests::credentials::Credentials;
pub use requests::new_comment::NewComment;
pub use requests::new_project::NewProject;
pub use requests::new_ticket::NewTicket;
pub use requests::project_update::ProjectUpdate;
pub use requests::sign_up_request::SignUpRequest;
pub use requests::status_update::StatusUpdate;
pub use requests::team_member_change::TeamMemberChange;
pub use requests::ticket_update::TicketUpdate;
