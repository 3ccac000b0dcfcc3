//! Login, logout and session restore on top of the store.

use std::future::Future;

use thiserror::Error;

use crate::persistence::{Persistence, PersistenceError};
use crate::resource::OperationError;
use crate::store::Store;

use super::intent::SessionIntent;
use super::token::AuthToken;

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";

/// Credentials returned by a successful login request.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub user: String,
    pub token: AuthToken,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Login failed: {0}")]
    Login(#[from] OperationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Owns the only path between the session slice and persisted storage.
pub struct SessionManager<P: Persistence> {
    store: Store,
    persistence: P,
}

impl<P: Persistence> SessionManager<P> {
    pub fn new(store: Store, persistence: P) -> Self {
        Self { store, persistence }
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Restore a persisted session. Returns whether one was found.
    ///
    /// A half-written session (user without token or the reverse) is
    /// treated as absent.
    pub fn restore(&self) -> Result<bool, PersistenceError> {
        let user = self.persistence.load(USER_KEY)?;
        let token = self.persistence.load(TOKEN_KEY)?;
        match (user, token) {
            (Some(user), Some(token)) => {
                tracing::info!(user = %user, "Restored persisted session");
                self.store.dispatch(SessionIntent::Restored {
                    user,
                    token: AuthToken::new(token),
                });
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Run a login request through its lifecycle and persist the result.
    pub async fn login<F>(&self, request: F) -> Result<(), SessionError>
    where
        F: Future<Output = Result<Credentials, OperationError>>,
    {
        self.store.dispatch(SessionIntent::LoginStarted);
        match request.await {
            Ok(Credentials { user, token }) => {
                if let Err(err) = self.persist(&user, &token) {
                    tracing::warn!(%err, "Login succeeded but session could not be saved");
                    self.store.dispatch(SessionIntent::LoginFailed {
                        reason: OperationError::from(err.to_string()),
                    });
                    return Err(SessionError::Persistence(err));
                }
                tracing::info!(user = %user, "Logged in");
                self.store
                    .dispatch(SessionIntent::LoginSucceeded { user, token });
                Ok(())
            }
            Err(reason) => {
                tracing::warn!(%reason, "Login failed");
                self.store.dispatch(SessionIntent::LoginFailed {
                    reason: reason.clone(),
                });
                Err(SessionError::Login(reason))
            }
        }
    }

    fn persist(&self, user: &str, token: &AuthToken) -> Result<(), PersistenceError> {
        self.persistence.save(USER_KEY, user)?;
        self.persistence.save(TOKEN_KEY, token.expose())
    }

    /// Clear persisted data and every store.
    ///
    /// The in-memory state is reset even if clearing storage fails; the
    /// storage error is still returned.
    pub fn logout(&self) -> Result<(), PersistenceError> {
        let cleared = self.persistence.clear();
        self.store.dispatch(SessionIntent::LoggedOut);
        self.store.reset();
        tracing::info!("Logged out");
        cleared
    }
}
