mod models;
mod requests;
