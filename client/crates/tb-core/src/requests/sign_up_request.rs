use crate::requests::is_blank;
use crate::{CoreError, Result as CoreErrorResult, UserRole};

use serde::Serialize;

/// Body of `POST /signup`
#[derive(Clone, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl SignUpRequest {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if is_blank(&self.username) || is_blank(&self.email) || self.password.is_empty() {
            return Err(CoreError::validation(
                "Username, email and password are required.",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
