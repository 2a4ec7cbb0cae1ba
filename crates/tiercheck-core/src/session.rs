//! Client-side session state and persistence.
//!
//! The session store is the single owner of the client's belief about which
//! identity is currently authenticated. The server keeps no session; every
//! request re-authenticates via Basic auth, so "logged in" here only means
//! "these credentials were accepted once and are kept for future requests".
//!
//! The persisted file is trusted on read: a restored identity is assumed
//! valid until a request proves otherwise. This mirrors the demo behavior
//! deliberately and is not a hardened credential store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Credentials of the currently authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub password: String,
}

/// Session state: identity plus the transient status line.
///
/// Invariant: `identity` is present if and only if the UI shows the
/// authenticated screen. `status_message` is overwritten by every
/// operation, never accumulated.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub status_message: String,
}

/// Owns `SessionState` and its durable mirror on disk.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    state: SessionState,
}

impl SessionStore {
    /// Creates a store by reading the persisted session file once.
    ///
    /// A present and parseable file yields a logged-in state with no network
    /// call. A missing, unreadable, or corrupted file yields a logged-out
    /// state; storage failures are never fatal at startup.
    pub fn restore(path: PathBuf) -> Self {
        let identity = read_persisted(&path);
        Self {
            path,
            state: SessionState {
                identity,
                status_message: String::new(),
            },
        }
    }

    /// Creates a logged-out store without touching the filesystem.
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            state: SessionState::default(),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.identity.is_some()
    }

    pub fn status_message(&self) -> &str {
        &self.state.status_message
    }

    /// Marks the identity as authenticated and mirrors it to disk.
    ///
    /// Callers invoke this only after the gateway confirmed the credentials
    /// were accepted. A persistence failure is logged and the in-memory
    /// login still proceeds; the session simply won't survive a restart.
    pub fn login(&mut self, identity: Identity) {
        if let Err(e) = write_persisted(&self.path, &identity) {
            tracing::warn!("failed to persist session: {e:#}");
        }
        self.state.identity = Some(identity);
        self.state.status_message = "Login successful!".to_string();
    }

    /// Clears the identity and erases the persisted file. Idempotent.
    pub fn logout(&mut self) {
        if let Err(e) = fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!("failed to remove persisted session: {e}");
        }
        self.state.identity = None;
        self.state.status_message.clear();
    }

    /// Overwrites the status message. No other side effects.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.state.status_message = text.into();
    }
}

fn read_persisted(path: &Path) -> Option<Identity> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("failed to read persisted session: {e}");
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(identity) => Some(identity),
        Err(e) => {
            tracing::warn!("corrupted session file, treating as logged out: {e}");
            None
        }
    }
}

fn write_persisted(path: &Path, identity: &Identity) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let contents = serde_json::to_string(identity).context("serialize session")?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("Failed to write session to {}", tmp_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))
            .context("set session file permissions")?;
    }

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity() -> Identity {
        Identity {
            username: "testuser".to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn test_restore_missing_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::restore(dir.path().join("session.json"));
        assert!(!store.is_logged_in());
        assert_eq!(store.status_message(), "");
    }

    #[test]
    fn test_login_persists_exact_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = SessionStore::restore(path.clone());

        store.login(test_identity());

        assert_eq!(store.identity(), Some(&test_identity()));
        assert_eq!(store.status_message(), "Login successful!");

        let persisted: Identity =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(persisted, test_identity());
    }

    #[test]
    fn test_restore_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        // Pre-seed the file as a prior login would have
        std::fs::write(
            &path,
            r#"{"username":"testuser","password":"password123"}"#,
        )
        .unwrap();

        let store = SessionStore::restore(path);
        assert_eq!(store.identity(), Some(&test_identity()));
    }

    #[test]
    fn test_restore_corrupted_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::restore(path);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = SessionStore::restore(path.clone());
        store.login(test_identity());

        store.logout();
        store.logout();

        assert!(!store.is_logged_in());
        assert_eq!(store.status_message(), "");
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = SessionStore::restore(path.clone());
        store.login(test_identity());

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
