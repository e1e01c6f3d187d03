use crate::session::stored_session::Session;

/// Result of loading the session file - distinguishes "not found" from corruption.
#[derive(Debug, Default)]
pub struct SessionLoad {
    pub session: Option<Session>,
    /// Present if the file exists but could not be parsed
    pub corruption_error: Option<String>,
}
