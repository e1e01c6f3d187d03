use crate::session::{Session, SessionResult, SessionStore};

use std::sync::{PoisonError, RwLock};

use log::warn;

/// The current login, shared by everything that needs identity or a token.
///
/// Login is the only writer (`set`), logout the only clearer (`clear`).
/// Every change goes through the [`SessionStore`] first when one is attached.
#[derive(Debug)]
pub struct SessionContext {
    store: Option<SessionStore>,
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    /// Restore the session persisted in `store`.
    ///
    /// A corrupted file is backed up and treated as logged out.
    pub fn load(store: SessionStore) -> SessionResult<Self> {
        let loaded = store.load()?;

        if let Some(reason) = loaded.corruption_error {
            warn!("Ignoring corrupted session ({reason}); you will need to log in again");
            store.backup_corrupted()?;
        }

        Ok(Self {
            store: Some(store),
            current: RwLock::new(loaded.session),
        })
    }

    /// A session that lives only in memory
    pub fn ephemeral(session: Option<Session>) -> Self {
        Self {
            store: None,
            current: RwLock::new(session),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bearer token of the logged-in user
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.user.id.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Record a successful login.
    pub fn set(&self, session: Session) -> SessionResult<()> {
        if let Some(store) = &self.store {
            store.save(&session)?;
        }
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
        Ok(())
    }

    /// Log out. Returns whether a session was active.
    pub fn clear(&self) -> SessionResult<bool> {
        let removed = match &self.store {
            Some(store) => store.clear()?,
            None => false,
        };
        let previous = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(removed || previous.is_some())
    }
}
