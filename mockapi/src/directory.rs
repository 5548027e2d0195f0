//! In-memory account directory seeded from the config file.
//!
//! Passwords are bcrypt-hashed at load time and verified on every login,
//! so the credential path behaves like a real backend without a database.

use bcrypt::{hash, verify};
use contracts::AuthUser;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::DemoAccount;
use crate::error::{ApiError, Result};

// DEFAULT_COST makes every spawned test instance pay ~100ms per seeded
// account; the minimum cost keeps startup fast while still exercising
// bcrypt verification.
const DEV_BCRYPT_COST: u32 = 4;

#[derive(Debug)]
struct DirectoryEntry {
    identifier: String,
    password_hash: String,
    user: AuthUser,
}

#[derive(Clone)]
pub struct AccountDirectory {
    entries: Arc<Vec<DirectoryEntry>>,
}

impl AccountDirectory {
    pub fn from_accounts(accounts: &[DemoAccount]) -> Result<Self> {
        let mut entries = Vec::with_capacity(accounts.len());
        for account in accounts {
            let password_hash = hash(&account.password, DEV_BCRYPT_COST)?;
            entries.push(DirectoryEntry {
                identifier: account.identifier.clone(),
                password_hash,
                user: AuthUser {
                    id: Uuid::new_v4().to_string(),
                    display_name: account.display_name.clone(),
                    role: account.role,
                    school_code: account.school_code.clone(),
                    school_id: account.school_id.clone(),
                    email: account.email.clone(),
                },
            });
        }
        Ok(Self {
            entries: Arc::new(entries),
        })
    }

    /// Looks the identifier up and checks the password against its bcrypt
    /// hash. Unknown identifiers and bad passwords are indistinguishable.
    pub fn authenticate(&self, identifier: &str, password: &str) -> Result<AuthUser> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.identifier == identifier)
            .ok_or(ApiError::InvalidCredentials)?;

        if !verify(password, &entry.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }

        Ok(entry.user.clone())
    }

    pub fn find_by_id(&self, user_id: &str) -> Option<AuthUser> {
        self.entries
            .iter()
            .find(|e| e.user.id == user_id)
            .map(|e| e.user.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
