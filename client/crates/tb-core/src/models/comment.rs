use crate::models::wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(default, deserialize_with = "wire::string_or_default")]
    pub text: String,

    #[serde(default, deserialize_with = "wire::id_ref")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "wire::id_ref")]
    pub ticket_id: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
