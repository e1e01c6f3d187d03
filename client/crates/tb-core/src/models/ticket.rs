use crate::models::wire;
use crate::{Priority, TicketStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ticket as cached from the backend.
///
/// `status` is kept as the raw wire string: the backend owns the token set,
/// and the board decides how to bucket it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default, deserialize_with = "wire::string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "wire::string_or_default")]
    pub description: String,

    #[serde(default, deserialize_with = "wire::lenient_priority")]
    pub priority: Priority,

    // Workflow
    #[serde(default, deserialize_with = "wire::string_or_default")]
    pub status: String,

    // Assignment
    #[serde(default, deserialize_with = "wire::id_list")]
    pub assignee: Vec<String>,

    #[serde(default, deserialize_with = "wire::id_ref")]
    pub project_id: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: TicketStatus) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            status: status.as_str().to_string(),
            assignee: Vec::new(),
            project_id: None,
            created_at: None,
        }
    }

    /// Column this ticket belongs to; unknown statuses fall back to `open`.
    pub fn status_bucket(&self) -> TicketStatus {
        TicketStatus::bucket(&self.status)
    }

    pub fn set_status(&mut self, status: TicketStatus) {
        self.status = status.as_str().to_string();
    }

    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assignee.iter().any(|id| id == user_id)
    }
}
