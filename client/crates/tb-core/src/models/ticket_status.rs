use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Workflow status of a ticket, one per board column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Newly filed, not yet triaged. Also the fallback bucket.
    #[default]
    Open,
    /// Accepted and waiting to be picked up
    ToDo,
    /// Being worked on
    InProgress,
    /// Finished
    Done,
}

impl TicketStatus {
    /// Every known status in board column order
    pub const ALL: [TicketStatus; 4] = [Self::Open, Self::ToDo, Self::InProgress, Self::Done];

    /// Status used for tickets whose wire status is not recognized
    pub const FALLBACK: TicketStatus = TicketStatus::Open;

    /// Wire representation, also the column key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Column heading
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Case-insensitive match against the known keys. Surrounding
    /// whitespace is not ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(key))
    }

    /// Like [`TicketStatus::from_key`], but unknown values land in [`TicketStatus::FALLBACK`].
    pub fn bucket(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Self::FALLBACK)
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::from_key(s).ok_or_else(|| CoreError::InvalidTicketStatus {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
