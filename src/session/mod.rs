//! Process-wide authentication state.
//!
//! The provider is constructed once at startup and injected where needed;
//! it is the single writer of the session record, and all access happens on
//! the same cooperative scheduling turn, so no locking is involved.

pub mod store;

pub use store::SessionStore;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

use crate::backend::{Backend, BackendError};
use crate::error::AppError;
use crate::models::Role;

/// Minimal identity record for the signed-in user. Persisted between runs,
/// overwritten wholesale on each sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Uninitialized,
    Restoring,
    Authenticated(SessionUser),
    Anonymous,
}

pub struct AuthProvider {
    backend: Backend,
    store: SessionStore,
    state: AuthState,
}

impl AuthProvider {
    pub fn new(backend: Backend, store: SessionStore) -> Self {
        Self {
            backend,
            store,
            state: AuthState::Uninitialized,
        }
    }

    /// Restore a previously persisted session. A missing or unreadable
    /// record yields the anonymous state, never an error.
    pub fn initialize(&mut self) {
        self.state = AuthState::Restoring;
        self.state = match self.store.load() {
            Ok(Some(session)) => AuthState::Authenticated(session),
            Ok(None) => AuthState::Anonymous,
            Err(e) => {
                warn!("No se pudo restaurar sesión: {}", e);
                AuthState::Anonymous
            }
        };
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        match &self.state {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    /// True until `initialize` has resolved the persisted record.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, AuthState::Uninitialized | AuthState::Restoring)
    }

    /// Authenticate against the backend procedure. On failure the prior
    /// state is left untouched.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<SessionUser, AppError> {
        let payload = self
            .backend
            .rpc(
                "authenticate_user",
                json!({ "p_email": email, "p_password": password }),
            )
            .await?;

        // The procedure returns a row set; a single object also shows up in
        // the wild depending on how it is declared.
        let row = match payload {
            Value::Array(mut rows) => {
                if rows.is_empty() {
                    None
                } else {
                    Some(rows.remove(0))
                }
            }
            Value::Null => None,
            other => Some(other),
        };

        let row = row.ok_or(AppError::InvalidCredentials)?;
        let session: SessionUser =
            serde_json::from_value(row).map_err(|e| BackendError::Decode(e.to_string()))?;

        self.store.save(&session)?;
        self.state = AuthState::Authenticated(session.clone());
        Ok(session)
    }

    /// Clears both the in-memory and the persisted session. Idempotent.
    pub fn sign_out(&mut self) -> Result<(), AppError> {
        self.store.clear()?;
        self.state = AuthState::Anonymous;
        Ok(())
    }
}
