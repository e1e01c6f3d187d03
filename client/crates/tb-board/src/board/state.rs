use crate::BoardSnapshot;

use std::sync::Arc;

/// Published board lifecycle.
#[derive(Debug, Clone)]
pub enum BoardState {
    Loading,
    Ready(Arc<BoardSnapshot>),
    Failed { message: String },
}

impl BoardState {
    pub fn snapshot(&self) -> Option<&Arc<BoardSnapshot>> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
