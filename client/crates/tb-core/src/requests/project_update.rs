use crate::requests::{PROJECT_REQUIRED_FIELDS, is_blank};
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Body of `PUT /project/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ProjectUpdate {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.title.is_none() && self.description.is_none() && self.status.is_none() {
            return Err(CoreError::validation("Nothing to update."));
        }

        let blank = |field: &Option<String>| field.as_deref().is_some_and(is_blank);
        if blank(&self.title) || blank(&self.description) {
            return Err(CoreError::validation(PROJECT_REQUIRED_FIELDS));
        }
        Ok(())
    }
}
