use crate::requests::{TICKET_REQUIRED_FIELDS, is_blank};
use crate::{CoreError, Priority, Result as CoreErrorResult, TicketStatus};

use serde::Serialize;

/// Body of `POST /ticket/`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub project_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignee: Vec<String>,
}

impl NewTicket {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: Priority::default(),
            status: TicketStatus::Open,
            project_id: project_id.into(),
            assignee: Vec::new(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if is_blank(&self.title) || is_blank(&self.description) || is_blank(&self.project_id) {
            return Err(CoreError::validation(TICKET_REQUIRED_FIELDS));
        }
        Ok(())
    }
}
