use crate::TicketStatus;

use serde::Serialize;

/// Body of `PUT /ticket/:id/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: TicketStatus,
}
