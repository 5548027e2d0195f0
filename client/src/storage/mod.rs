//! Local session vault.
//!
//! A small key/value file standing in for the browser's localStorage:
//! the same three entries the web client keeps (`melio_user`,
//! `accessToken`, `refreshToken`), persisted as pretty JSON so a stored
//! session survives restarts.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use contracts::storage as storage_keys;
use contracts::AuthUser;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("failed to write vault file: {0}")]
    Write(std::io::Error),
    #[error("failed to encode vault entry: {0}")]
    Encode(serde_json::Error),
}

/// The locally remembered session: the cached user plus both tokens.
/// `refresh_token` may be absent for sessions stored by older builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSession {
    pub user: AuthUser,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

pub struct Vault {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl Vault {
    /// Opens the vault at `path`. A missing file yields an empty vault;
    /// unreadable content is discarded the same way a cleared browser
    /// profile would be.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(error) => {
                    log::warn!(
                        "Vault at '{}' is unreadable ({}); starting empty",
                        path.display(),
                        error
                    );
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self { path, entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn save(&self) -> Result<(), VaultError> {
        let encoded = serde_json::to_string_pretty(&self.entries).map_err(VaultError::Encode)?;
        fs::write(&self.path, encoded).map_err(VaultError::Write)
    }

    /// Reads the persisted session.
    ///
    /// A stored user entry without an access token, or one that fails to
    /// decode, counts as corruption: the session entries are cleared from
    /// disk and `None` is returned.
    pub fn read_session(&mut self) -> Result<Option<PersistedSession>, VaultError> {
        let Some(raw_user) = self.get(storage_keys::USER_KEY).map(str::to_owned) else {
            return Ok(None);
        };

        let user = match serde_json::from_str::<AuthUser>(&raw_user) {
            Ok(user) => user,
            Err(error) => {
                log::warn!("Stored user entry is unreadable ({}); clearing session", error);
                self.clear_session()?;
                return Ok(None);
            }
        };

        let Some(access_token) = self.get(storage_keys::ACCESS_TOKEN_KEY).map(str::to_owned)
        else {
            log::warn!("Stored user without an access token; clearing session");
            self.clear_session()?;
            return Ok(None);
        };

        let refresh_token = self.get(storage_keys::REFRESH_TOKEN_KEY).map(str::to_owned);

        Ok(Some(PersistedSession {
            user,
            access_token,
            refresh_token,
        }))
    }

    /// Writes all three session entries and flushes the vault to disk.
    pub fn write_session(&mut self, session: &PersistedSession) -> Result<(), VaultError> {
        let encoded_user = serde_json::to_string(&session.user).map_err(VaultError::Encode)?;
        self.set(storage_keys::USER_KEY, encoded_user);
        self.set(storage_keys::ACCESS_TOKEN_KEY, session.access_token.clone());
        match &session.refresh_token {
            Some(token) => self.set(storage_keys::REFRESH_TOKEN_KEY, token.clone()),
            None => {
                self.remove(storage_keys::REFRESH_TOKEN_KEY);
            }
        }
        self.save()
    }

    /// Removes the session entries and flushes the vault to disk.
    pub fn clear_session(&mut self) -> Result<(), VaultError> {
        self.remove(storage_keys::USER_KEY);
        self.remove(storage_keys::ACCESS_TOKEN_KEY);
        self.remove(storage_keys::REFRESH_TOKEN_KEY);
        self.save()
    }
}
