mod comment;
mod project;
mod ticket;
