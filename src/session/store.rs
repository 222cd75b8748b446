use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::config::get_config_dir;
use crate::error::AppError;

use super::SessionUser;

const SESSION_FILE: &str = "session.json";

/// One JSON file in the config dir holding the serialized session record.
/// The record is trusted until explicitly cleared; there is no expiry.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn open_default() -> Result<Self, AppError> {
        Ok(Self {
            path: get_config_dir()?.join(SESSION_FILE),
        })
    }

    /// Store backed by an explicit path; tests point this at a temp dir.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Option<SessionUser>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::SessionStore(e.to_string())),
        };
        let session = serde_json::from_str(&content)
            .map_err(|e| AppError::SessionStore(e.to_string()))?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &SessionUser) -> Result<(), AppError> {
        let content = serde_json::to_string_pretty(session)
            .map_err(|e| AppError::SessionStore(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| AppError::SessionStore(e.to_string()))
    }

    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::SessionStore(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn temp_store() -> SessionStore {
        let path = std::env::temp_dir().join(format!("uniadmin-session-{}.json", Uuid::new_v4()));
        SessionStore::at(path)
    }

    #[test]
    fn load_on_missing_file_is_none() {
        let store = temp_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store();
        let session = SessionUser {
            id: Uuid::new_v4(),
            email: Some("admin@uni.edu".to_string()),
            role: None,
            full_name: Some("Admin".to_string()),
        };
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let store = temp_store();
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let store = temp_store();
        fs::write(store.path.clone(), "not json").unwrap();
        assert!(store.load().is_err());
        store.clear().unwrap();
    }
}
