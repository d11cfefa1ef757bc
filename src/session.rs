//! Persisted login flag.
//!
//! The dashboard password is a shared convenience gate compared on the
//! client; it is not a security boundary. All that survives between runs is
//! a boolean "logged in" marker in a small JSON file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::errors::DashboardError;

const SESSION_FILE: &str = "session.json";
const SESSION_DIR: &str = ".cfc-orders";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub logged_in: bool,
    pub saved_at: DateTime<Utc>,
}

/// File-backed login flag.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$CFC_HOME/session.json`, falling back to `$HOME/.cfc-orders/session.json`.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("CFC_HOME") {
            let mut path = PathBuf::from(dir);
            if path.extension().is_none() {
                path.push(SESSION_FILE);
            }
            return Some(path);
        }

        std::env::var("HOME").ok().map(|home| {
            let mut path = PathBuf::from(home);
            path.push(SESSION_DIR);
            path.push(SESSION_FILE);
            path
        })
    }

    /// Store at `configured`, or at [`SessionStore::default_path`].
    pub fn resolve(configured: Option<&Path>) -> Result<Self, DashboardError> {
        configured
            .map(Path::to_path_buf)
            .or_else(Self::default_path)
            .map(Self::new)
            .ok_or_else(|| {
                DashboardError::Session("no suitable directory for the session file".into())
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compares `password` against the shared one and persists the flag on a
    /// match. A mismatch leaves any existing flag untouched.
    pub fn login(&self, password: &str, expected: &str) -> Result<StoredSession, DashboardError> {
        if password != expected {
            warn!("Dashboard login rejected");
            return Err(DashboardError::IncorrectPassword);
        }

        let session = StoredSession {
            logged_in: true,
            saved_at: Utc::now(),
        };
        self.save(&session)?;
        info!(path = %self.path.display(), "Dashboard login saved");
        Ok(session)
    }

    pub fn logout(&self) -> Result<(), DashboardError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!(path = %self.path.display(), "Dashboard session cleared");
        }
        Ok(())
    }

    /// A missing or unreadable file reads as logged out.
    pub fn is_logged_in(&self) -> bool {
        match self.read() {
            Ok(Some(session)) => session.logged_in,
            Ok(None) => false,
            Err(err) => {
                warn!(error = %err, "Ignoring unreadable session file");
                false
            }
        }
    }

    pub fn read(&self) -> Result<Option<StoredSession>, DashboardError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    /// Errors with [`DashboardError::NotLoggedIn`] unless the flag is set.
    pub fn require_login(&self) -> Result<(), DashboardError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(DashboardError::NotLoggedIn)
        }
    }

    fn save(&self, session: &StoredSession) -> Result<(), DashboardError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(session)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("nested").join(SESSION_FILE))
    }

    #[test]
    fn login_persists_flag_and_logout_clears_it() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert!(!store.is_logged_in());

        store.login("cfc2025", "cfc2025").unwrap();
        assert!(store.is_logged_in());
        assert!(store.path().exists());

        store.logout().unwrap();
        assert!(!store.is_logged_in());
        assert_matches!(store.require_login(), Err(DashboardError::NotLoggedIn));
    }

    #[test]
    fn wrong_password_is_rejected_without_writing() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert_matches!(
            store.login("letmein", "cfc2025"),
            Err(DashboardError::IncorrectPassword)
        );
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_reads_as_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SESSION_FILE);
        fs::write(&path, "not json").unwrap();

        let store = SessionStore::new(path);
        assert!(!store.is_logged_in());
        assert_matches!(store.read(), Err(DashboardError::Session(_)));
    }
}
