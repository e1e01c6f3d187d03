use crate::DEFAULT_ROLLBACK_ON_FAILURE;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Undo an optimistic move when the backend rejects the status change
    pub rollback_on_failure: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rollback_on_failure: DEFAULT_ROLLBACK_ON_FAILURE,
        }
    }
}
