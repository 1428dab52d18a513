//! Token-file credential store
//!
//! A bearer token kept in a plain file under the user's config directory,
//! standing in for the browser cookie the original client used. The token
//! is read once at construction; `save`/`clear` keep file and memory in
//! step. Obtaining a token (the login flow) is outside this client.

use assist_application::ports::credentials::CredentialProvider;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::debug;

pub struct TokenFileCredentials {
    path: PathBuf,
    token: RwLock<Option<String>>,
}

impl TokenFileCredentials {
    /// Default location: `<config dir>/uni-assist/token`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("uni-assist").join("token"))
    }

    /// Load from `path`. A missing file is not an error: it just means
    /// unauthenticated.
    pub fn load(path: PathBuf) -> io::Result<Self> {
        let token = match fs::read_to_string(&path) {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => None,
            Err(error) => return Err(error),
        };
        debug!(path = %path.display(), present = token.is_some(), "token file loaded");
        Ok(Self {
            path,
            token: RwLock::new(token),
        })
    }

    /// Persist a new token.
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
        Ok(())
    }

    /// Forget the token and remove the file.
    pub fn clear(&self) -> io::Result<()> {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
        match fs::remove_file(&self.path) {
            Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error),
            _ => Ok(()),
        }
    }
}

impl CredentialProvider for TokenFileCredentials {
    fn bearer_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_means_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenFileCredentials::load(dir.path().join("token")).unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("token");

        let store = TokenFileCredentials::load(path.clone()).unwrap();
        store.save("abc123").unwrap();
        assert_eq!(store.bearer_token().as_deref(), Some("abc123"));

        let reloaded = TokenFileCredentials::load(path).unwrap();
        assert_eq!(reloaded.bearer_token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_clear_removes_token_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");

        let store = TokenFileCredentials::load(path.clone()).unwrap();
        store.save("abc123").unwrap();
        store.clear().unwrap();

        assert!(!store.is_authenticated());
        assert!(!path.exists());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_whitespace_only_file_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "\n  \n").unwrap();

        let store = TokenFileCredentials::load(path).unwrap();
        assert!(store.bearer_token().is_none());
    }
}
