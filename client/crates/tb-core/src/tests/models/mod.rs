mod priority;
mod ticket;
mod ticket_status;
mod user;
