use crate::requests::{PROJECT_REQUIRED_FIELDS, is_blank};
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Body of `POST /project/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl NewProject {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: None,
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if is_blank(&self.title) || is_blank(&self.description) {
            return Err(CoreError::validation(PROJECT_REQUIRED_FIELDS));
        }
        Ok(())
    }
}
