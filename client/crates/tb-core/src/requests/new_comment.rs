use crate::requests::is_blank;
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Body of `POST /ticket/comment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub text: String,
    pub user_id: String,
    pub ticket_id: String,
}

impl NewComment {
    /// Build a comment, rejecting it before any request is made.
    ///
    /// `user_id` is the logged-in author; `None` means nobody is logged in.
    #[track_caller]
    pub fn new(text: &str, user_id: Option<&str>, ticket_id: &str) -> CoreErrorResult<Self> {
        if is_blank(text) {
            return Err(CoreError::validation("Comment cannot be empty."));
        }
        let Some(user_id) = user_id.filter(|id| !is_blank(id)) else {
            return Err(CoreError::validation(
                "You must be logged in to post a comment.",
            ));
        };
        if is_blank(ticket_id) {
            return Err(CoreError::validation(
                "Cannot post comment: Missing ticket ID.",
            ));
        }

        Ok(Self {
            text: text.trim().to_string(),
            user_id: user_id.to_string(),
            ticket_id: ticket_id.to_string(),
        })
    }
}
