pub mod column;
pub mod snapshot;
pub mod state;
pub mod ticket_board;
pub(crate) mod unconfirmed;
