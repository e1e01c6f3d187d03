//! Unit tests for the gateway crate.
//!
//! These tests can access crate internals via `use crate::`.


use crate::{Session, SessionContext};

use std::sync::Arc;

use tb_core::User;

pub(crate) fn user(id: &str) -> User {
    User {
        id: id.to_string(),
        username: format!("{id}-name"),
        name: None,
        email: format!("{id}@example.com"),
        role: Some("developer".to_string()),
    }
}

pub(crate) fn logged_in(id: &str, token: &str) -> Arc<SessionContext> {
    Arc::new(SessionContext::ephemeral(Some(Session::new(user(id), token))))
}
