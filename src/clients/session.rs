use std::sync::{Arc, RwLock};

use anyhow::{Error, Result, anyhow};
use tracing::{info, warn};

use crate::{
    clients::storage::LocalStorage,
    models::session::{Session, User},
};

pub const TOKEN_KEY: &str = "bellory-admin-token";
pub const USER_KEY: &str = "bellory-admin-user";

/// Holds the signed-in session and mirrors it to durable storage.
///
/// Clones share the same session, so the API client and the caller always
/// agree on whether the user is signed in.
#[derive(Debug, Clone)]
pub struct SessionStore {
    storage: LocalStorage,
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Restores a stored session. A stored user that cannot be parsed clears
    /// both keys.
    pub fn load(storage: LocalStorage) -> Result<Self, Error> {
        let token = storage.get_item(TOKEN_KEY)?;
        let user = storage.get_item(USER_KEY)?;

        let current = match (token, user) {
            (Some(token), Some(user)) => match serde_json::from_str::<User>(&user) {
                Ok(user) => {
                    info!(user_id = user.id, "Restored stored session");
                    Some(Session { token, user })
                }
                Err(e) => {
                    warn!(error = %e, "Stored user is corrupt, clearing session");
                    storage.remove_item(TOKEN_KEY)?;
                    storage.remove_item(USER_KEY)?;
                    None
                }
            },
            _ => None,
        };

        Ok(Self {
            storage,
            current: Arc::new(RwLock::new(current)),
        })
    }

    pub fn session(&self) -> Option<Session> {
        self.current.read().ok().and_then(|s| s.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().map(|s| s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session()
            .is_some_and(|s| !s.token.is_empty())
    }

    pub fn store(&self, session: Session) -> Result<(), Error> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set_item(TOKEN_KEY, &session.token)?;
        self.storage.set_item(USER_KEY, &user)?;

        info!(user_id = session.user.id, "Session stored");

        let mut current = self
            .current
            .write()
            .map_err(|_| anyhow!("Session lock poisoned"))?;
        *current = Some(session);
        Ok(())
    }

    /// Drops the in-memory session and both storage keys.
    pub fn clear(&self) -> Result<(), Error> {
        if let Ok(mut current) = self.current.write() {
            *current = None;
        }
        self.storage.remove_item(TOKEN_KEY)?;
        self.storage.remove_item(USER_KEY)?;

        info!("Session cleared");
        Ok(())
    }
}
