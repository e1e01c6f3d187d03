use serde::Deserialize;
use tb_core::User;

/// Body returned by `POST /login` and `POST /signup`
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}
