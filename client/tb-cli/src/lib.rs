//! tb-cli library
//!
//! Command definitions and their execution, shared by the `tb` binary and tests.

pub mod app;
pub mod board_commands;
pub mod cli;
pub mod commands;
pub mod comment_commands;
pub mod error;
pub mod find;
pub mod find_commands;
pub mod logger;
pub mod output;
pub mod project_commands;
pub mod ticket_commands;
pub mod user_commands;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
