pub mod comment;
pub mod priority;
pub mod project;
pub mod ticket;
pub mod ticket_status;
pub mod user;
pub mod user_role;
pub mod wire;
