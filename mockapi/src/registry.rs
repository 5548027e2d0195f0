//! Registry of outstanding refresh tokens.
//!
//! Refresh tokens are single-use: a successful rotation consumes the old
//! entry and registers the replacement. A new login from the same user
//! revokes whatever refresh token that user still had outstanding.

use dashmap::DashMap;
use std::sync::Arc;

use crate::token::now_ms;

#[derive(Debug, Clone)]
struct RefreshEntry {
    user_id: String,
    expires_at_ms: u64,
}

#[derive(Clone)]
pub struct RefreshRegistry {
    // token_id -> entry
    active: Arc<DashMap<String, RefreshEntry>>,
    // user_id -> token_id of that user's current refresh token
    current: Arc<DashMap<String, String>>,
}

impl RefreshRegistry {
    pub fn new() -> Self {
        Self {
            active: Arc::new(DashMap::new()),
            current: Arc::new(DashMap::new()),
        }
    }

    /// Registers a freshly issued refresh token and revokes the user's
    /// previous one, if any.
    pub fn register(&self, token_id: &str, user_id: &str, expires_at_ms: u64) {
        if let Some((_, old_id)) = self.current.remove(user_id) {
            if self.active.remove(&old_id).is_some() {
                log::info!("Revoked previous refresh token for user {}", user_id);
            }
        }
        self.active.insert(
            token_id.to_string(),
            RefreshEntry {
                user_id: user_id.to_string(),
                expires_at_ms,
            },
        );
        self.current.insert(user_id.to_string(), token_id.to_string());
    }

    /// Consumes a refresh token. Returns false when the token was never
    /// registered, was already used, was revoked, or has expired. A
    /// consumed token can never be consumed again.
    pub fn consume(&self, token_id: &str, reference_ms: u64) -> bool {
        let Some((_, entry)) = self.active.remove(token_id) else {
            return false;
        };
        self.current
            .remove_if(&entry.user_id, |_, current_id| current_id == token_id);
        entry.expires_at_ms > reference_ms
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Drops entries past their expiry. Returns how many were removed.
    pub fn cleanup_expired(&self) -> usize {
        let now = now_ms();
        let before = self.active.len();
        self.active.retain(|_, entry| entry.expires_at_ms > now);
        self.current.retain(|_, token_id| self.active.contains_key(token_id));
        before - self.active.len()
    }
}

impl Default for RefreshRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_succeeds_once() {
        let registry = RefreshRegistry::new();
        registry.register("t-1", "u-1", 10_000);
        assert!(registry.consume("t-1", 100));
        assert!(!registry.consume("t-1", 100));
    }

    #[test]
    fn unknown_token_is_rejected() {
        let registry = RefreshRegistry::new();
        assert!(!registry.consume("never-registered", 100));
    }

    #[test]
    fn expired_token_is_rejected() {
        let registry = RefreshRegistry::new();
        registry.register("t-1", "u-1", 1_000);
        assert!(!registry.consume("t-1", 1_000));
    }

    #[test]
    fn new_login_revokes_previous_refresh_token() {
        let registry = RefreshRegistry::new();
        registry.register("t-1", "u-1", 10_000);
        registry.register("t-2", "u-1", 10_000);
        assert!(!registry.consume("t-1", 100));
        assert!(registry.consume("t-2", 100));
    }

    #[test]
    fn users_do_not_revoke_each_other() {
        let registry = RefreshRegistry::new();
        registry.register("t-1", "u-1", 10_000);
        registry.register("t-2", "u-2", 10_000);
        assert!(registry.consume("t-1", 100));
        assert!(registry.consume("t-2", 100));
    }

    #[test]
    fn cleanup_drops_only_expired_entries() {
        let registry = RefreshRegistry::new();
        let now = now_ms();
        registry.register("old", "u-1", now.saturating_sub(1));
        registry.register("live", "u-2", now + 60_000);
        assert_eq!(registry.cleanup_expired(), 1);
        assert_eq!(registry.active_count(), 1);
        assert!(registry.consume("live", now));
    }
}
