//! Kanban board state and debounced search over the ticket gateway.

pub mod board;
pub mod error;
pub mod notification;
pub mod search;

#[cfg(test)]
mod tests;

pub use board::ticket_board::{Board, MoveOutcome, Persisted, STATUS_UPDATE_FAILED};
pub use board::column::Column;
pub use board::snapshot::BoardSnapshot;
pub use board::state::BoardState;
pub use error::{BoardError, Result as BoardResult};
pub use notification::{Notification, NotificationLevel, Notifier};
pub use search::debouncer::SearchDebouncer;
pub use search::state::SearchState;
