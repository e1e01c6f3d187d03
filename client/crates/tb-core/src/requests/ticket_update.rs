use crate::requests::{TICKET_REQUIRED_FIELDS, is_blank};
use crate::{CoreError, Priority, Result as CoreErrorResult, TicketStatus};

use serde::Serialize;

/// Body of `PUT /ticket/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Vec<String>>,
}

impl TicketUpdate {
    /// Update that replaces the assignee set
    pub fn assign(user_ids: Vec<String>) -> Self {
        Self {
            assignee: Some(user_ids),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.project_id.is_none()
            && self.assignee.is_none()
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.is_empty() {
            return Err(CoreError::validation("Nothing to update."));
        }

        let blank = |field: &Option<String>| field.as_deref().is_some_and(is_blank);
        if blank(&self.title) || blank(&self.description) || blank(&self.project_id) {
            return Err(CoreError::validation(TICKET_REQUIRED_FIELDS));
        }

        if let Some(assignee) = &self.assignee
            && assignee.iter().all(|id| is_blank(id))
        {
            return Err(CoreError::validation(
                "Please select at least one team member to assign.",
            ));
        }

        Ok(())
    }
}
