//! Client-side session lifecycle.
//!
//! One service owns the gateway, the vault and the in-memory session.
//! Logging in persists the returned user and tokens; restoring at startup
//! revalidates the stored access token against the profile endpoint and
//! falls back to a single refresh attempt when it has gone stale. The
//! persisted session is destroyed only on logout, on a rejected refresh,
//! or on vault corruption. A network failure never signs the user out.

use contracts::{Audience, AuthUser, LoginRequest, Role};

use crate::api::{messages, AuthGateway, GatewayError};
use crate::session::guard::PendingFlag;
use crate::storage::{PersistedSession, Vault};

/// Outcome of a credential submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(Role),
    /// A previous submission is still running; this one was dropped.
    AlreadyPending,
    Rejected(&'static str),
}

/// Outcome of restoring the persisted session at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored(Role),
    /// Nothing usable in the vault.
    NoSession,
    /// The stored session is dead server-side; the vault was cleared.
    Expired,
    /// The API could not be reached; the vault was left untouched.
    Unreachable(&'static str),
}

pub struct SessionService {
    gateway: AuthGateway,
    vault: Vault,
    current: Option<PersistedSession>,
    pending: PendingFlag,
}

impl SessionService {
    pub fn new(gateway: AuthGateway, vault: Vault) -> Self {
        Self {
            gateway,
            vault,
            current: None,
            pending: PendingFlag::default(),
        }
    }

    pub fn current_user(&self) -> Option<&AuthUser> {
        self.current.as_ref().map(|session| &session.user)
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current.as_ref().map(|session| session.user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Submits credentials to the login endpoint of `audience`.
    ///
    /// Empty fields are rejected locally without a request, and a
    /// submission while another is in flight is dropped.
    pub async fn login(
        &mut self,
        audience: Audience,
        identifier: &str,
        password: &str,
    ) -> LoginOutcome {
        let identifier = identifier.trim();
        if identifier.is_empty() || password.is_empty() {
            return LoginOutcome::Rejected(messages::MISSING_FIELDS_FR);
        }

        if !self.pending.begin() {
            log::debug!("Ignoring login submission while one is in flight");
            return LoginOutcome::AlreadyPending;
        }

        let credentials = LoginRequest {
            identifier: identifier.to_string(),
            password: password.to_string(),
        };
        let result = self.gateway.login(audience, &credentials).await;
        self.pending.finish();

        match result {
            Ok(response) => {
                let session = PersistedSession {
                    user: response.user,
                    access_token: response.access_token,
                    refresh_token: Some(response.refresh_token),
                };
                if let Err(error) = self.vault.write_session(&session) {
                    log::warn!("Failed to persist session: {}", error);
                }
                let role = session.user.role;
                log::info!("Logged in as {} ({})", session.user.display_name, role);
                self.current = Some(session);
                LoginOutcome::LoggedIn(role)
            }
            Err(error) => {
                log::warn!("Login on {} endpoint failed: {}", audience, error);
                LoginOutcome::Rejected(messages::user_message(&error))
            }
        }
    }

    /// Restores the persisted session, if any.
    ///
    /// The stored access token is revalidated against the profile
    /// endpoint; the server's copy of the user replaces the cached one.
    /// A stale token triggers one refresh attempt followed by a single
    /// revalidation with the rotated pair.
    pub async fn restore(&mut self) -> RestoreOutcome {
        let stored = match self.vault.read_session() {
            Ok(stored) => stored,
            Err(error) => {
                log::warn!("Could not read the session vault: {}", error);
                None
            }
        };
        let Some(session) = stored else {
            return RestoreOutcome::NoSession;
        };

        log::info!("Restoring session for {}", session.user.display_name);

        match self.gateway.validate(&session.access_token).await {
            Ok(profile) => self.adopt(PersistedSession {
                user: profile.user,
                ..session
            }),
            Err(GatewayError::Unauthorized) => self.refresh_and_revalidate(session).await,
            Err(error) => {
                log::warn!("Could not validate the stored session: {}", error);
                RestoreOutcome::Unreachable(messages::user_message(&error))
            }
        }
    }

    async fn refresh_and_revalidate(&mut self, session: PersistedSession) -> RestoreOutcome {
        let Some(refresh_token) = session.refresh_token.clone() else {
            log::info!("Stored access token rejected and no refresh token kept; signing out");
            self.destroy();
            return RestoreOutcome::Expired;
        };

        let rotated = match self.gateway.refresh(&refresh_token).await {
            Ok(rotated) => rotated,
            Err(GatewayError::Unauthorized) => {
                log::info!("Refresh token rejected; signing out");
                self.destroy();
                return RestoreOutcome::Expired;
            }
            Err(error) => {
                log::warn!("Could not refresh the stored session: {}", error);
                return RestoreOutcome::Unreachable(messages::user_message(&error));
            }
        };

        let refreshed = PersistedSession {
            user: session.user,
            access_token: rotated.access_token,
            refresh_token: Some(rotated.refresh_token),
        };

        match self.gateway.validate(&refreshed.access_token).await {
            Ok(profile) => self.adopt(PersistedSession {
                user: profile.user,
                ..refreshed
            }),
            Err(GatewayError::Unauthorized) => {
                // Fresh pair already rejected: no second refresh attempt.
                log::warn!("Rotated access token was rejected; signing out");
                self.destroy();
                RestoreOutcome::Expired
            }
            Err(error) => {
                // The old refresh token was consumed by the rotation, so
                // the rotated pair must be persisted even though we could
                // not finish revalidating it.
                if let Err(save_error) = self.vault.write_session(&refreshed) {
                    log::warn!("Failed to persist rotated tokens: {}", save_error);
                }
                log::warn!("Could not revalidate the refreshed session: {}", error);
                RestoreOutcome::Unreachable(messages::user_message(&error))
            }
        }
    }

    fn adopt(&mut self, session: PersistedSession) -> RestoreOutcome {
        if let Err(error) = self.vault.write_session(&session) {
            log::warn!("Failed to persist restored session: {}", error);
        }
        let role = session.user.role;
        log::info!("Session restored for {} ({})", session.user.display_name, role);
        self.current = Some(session);
        RestoreOutcome::Restored(role)
    }

    /// Signs out locally: there is no logout endpoint, the session simply
    /// stops existing on this device.
    pub fn logout(&mut self) {
        if let Some(session) = &self.current {
            log::info!("Signing out {}", session.user.display_name);
        }
        self.destroy();
    }

    fn destroy(&mut self) {
        self.current = None;
        if let Err(error) = self.vault.clear_session() {
            log::warn!("Failed to clear the persisted session: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ApiSettings;
    use std::path::PathBuf;

    fn temp_vault_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "melio-service-{}-{}.json",
            tag,
            std::process::id()
        ))
    }

    // Nothing listens on port 1, so every request fails fast with a
    // connection error.
    fn unreachable_service(tag: &str) -> SessionService {
        let gateway = AuthGateway::new(&ApiSettings {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_ms: 1_000,
        })
        .unwrap();
        let path = temp_vault_path(tag);
        std::fs::remove_file(&path).ok();
        SessionService::new(gateway, Vault::open(path))
    }

    #[tokio::test]
    async fn empty_fields_are_rejected_without_a_request() {
        let mut service = unreachable_service("empty-fields");

        let outcome = service.login(Audience::Student, "", "demo1234").await;
        assert_eq!(outcome, LoginOutcome::Rejected(messages::MISSING_FIELDS_FR));

        let outcome = service.login(Audience::Student, "eleve.demo", "").await;
        assert_eq!(outcome, LoginOutcome::Rejected(messages::MISSING_FIELDS_FR));

        let outcome = service.login(Audience::Student, "   ", "demo1234").await;
        assert_eq!(outcome, LoginOutcome::Rejected(messages::MISSING_FIELDS_FR));
    }

    #[tokio::test]
    async fn submission_while_pending_is_dropped() {
        let mut service = unreachable_service("pending");
        assert!(service.pending.begin());

        let outcome = service.login(Audience::Student, "eleve.demo", "demo1234").await;
        assert_eq!(outcome, LoginOutcome::AlreadyPending);

        // Finishing the stuck request makes submissions possible again
        service.pending.finish();
        let outcome = service.login(Audience::Student, "eleve.demo", "demo1234").await;
        assert_eq!(outcome, LoginOutcome::Rejected(messages::NETWORK_ERROR_FR));
    }

    #[tokio::test]
    async fn network_failure_maps_to_the_french_network_message() {
        let mut service = unreachable_service("network");
        let outcome = service.login(Audience::Admin, "admin.demo", "demo1234").await;
        assert_eq!(outcome, LoginOutcome::Rejected(messages::NETWORK_ERROR_FR));
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn restore_with_an_empty_vault_is_no_session() {
        let mut service = unreachable_service("empty-vault");
        assert_eq!(service.restore().await, RestoreOutcome::NoSession);
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn logout_without_a_session_is_harmless() {
        let mut service = unreachable_service("logout-empty");
        service.logout();
        assert!(!service.is_authenticated());
        assert_eq!(service.current_role(), None);
    }
}
