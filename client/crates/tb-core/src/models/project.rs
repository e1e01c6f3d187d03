use crate::models::wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default, deserialize_with = "wire::string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "wire::string_or_default")]
    pub description: String,

    /// Free-form progress label, e.g. "Not Started" or "In Progress"
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "wire::id_list")]
    pub team_members: Vec<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn has_member(&self, user_id: &str) -> bool {
        self.team_members.iter().any(|id| id == user_id)
    }
}
