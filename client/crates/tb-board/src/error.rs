use std::panic::Location;

use error_location::ErrorLocation;
use tb_core::TicketStatus;
use thiserror::Error;

/// A move request the board refused. State is unchanged.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Board is not ready {location}")]
    NotReady { location: ErrorLocation },

    #[error("Unknown column '{key}' {location}")]
    UnknownColumn {
        key: String,
        location: ErrorLocation,
    },

    #[error("Ticket {ticket_id} is not at {column}[{index}] {location}")]
    TicketNotAt {
        ticket_id: String,
        column: TicketStatus,
        index: usize,
        location: ErrorLocation,
    },
}

impl BoardError {
    #[track_caller]
    pub fn not_ready() -> Self {
        Self::NotReady {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn ticket_not_at(ticket_id: impl Into<String>, column: TicketStatus, index: usize) -> Self {
        Self::TicketNotAt {
            ticket_id: ticket_id.into(),
            column,
            index,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
