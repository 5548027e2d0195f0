//! HMAC-signed bearer tokens for the mock API.
//!
//! Tokens are `base64url(payload).base64url(signature)` where the payload is
//! a JSON [`TokenClaims`] and the signature is HMAC-SHA256 over the encoded
//! payload. The claims carry a `kind` discriminant so an access token can
//! never be replayed against the refresh endpoint and vice versa.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use contracts::Role;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Refuse secrets that would make the HMAC trivially brute-forceable.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token secret must be at least {MIN_SECRET_LEN} bytes")]
    SecretTooShort,
    #[error("token format is invalid")]
    InvalidFormat,
    #[error("token signature mismatch")]
    InvalidSignature,
    #[error("token payload is not valid base64")]
    PayloadDecode,
    #[error("token payload is not valid json")]
    PayloadParse,
    #[error("token expired")]
    Expired,
    #[error("token kind mismatch")]
    KindMismatch,
}

/// Distinguishes the short-lived bearer token from the long-lived
/// rotation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub token_id: String,
    pub user_id: String,
    pub role: Role,
    pub kind: TokenKind,
    pub issued_at_ms: u64,
    pub expires_at_ms: u64,
}

/// A freshly minted access/refresh pair. `refresh_id` is the claim id of
/// the refresh half, used to register it for single-use consumption.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub refresh_id: String,
    pub refresh_expires_at_ms: u64,
}

#[derive(Debug, Clone)]
pub struct TokenService {
    secret: Vec<u8>,
    access_ttl_ms: u64,
    refresh_ttl_ms: u64,
}

impl TokenService {
    pub fn new(secret: &[u8], access_ttl_ms: u64, refresh_ttl_ms: u64) -> Result<Self, TokenError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(TokenError::SecretTooShort);
        }
        Ok(Self {
            secret: secret.to_vec(),
            access_ttl_ms,
            refresh_ttl_ms,
        })
    }

    /// Issues one access token and one refresh token for the same user.
    pub fn issue_pair(&self, user_id: &str, role: Role, now_ms: u64) -> Result<TokenPair, TokenError> {
        let refresh_id = Uuid::new_v4().to_string();
        let refresh_expires_at_ms = now_ms + self.refresh_ttl_ms;
        let access = self.sign(&TokenClaims {
            token_id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            role,
            kind: TokenKind::Access,
            issued_at_ms: now_ms,
            expires_at_ms: now_ms + self.access_ttl_ms,
        })?;
        let refresh = self.sign(&TokenClaims {
            token_id: refresh_id.clone(),
            user_id: user_id.to_string(),
            role,
            kind: TokenKind::Refresh,
            issued_at_ms: now_ms,
            expires_at_ms: refresh_expires_at_ms,
        })?;
        Ok(TokenPair {
            access_token: access,
            refresh_token: refresh,
            refresh_id,
            refresh_expires_at_ms,
        })
    }

    /// Checks signature, expiry and kind, and returns the claims on success.
    pub fn verify(
        &self,
        token: &str,
        expected_kind: TokenKind,
        reference_ms: u64,
    ) -> Result<TokenClaims, TokenError> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or(TokenError::InvalidFormat)?;
        if payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(TokenError::InvalidFormat);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::InvalidSignature)?;
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|_| TokenError::SecretTooShort)?;
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::PayloadDecode)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::PayloadParse)?;

        if claims.expires_at_ms <= reference_ms {
            return Err(TokenError::Expired);
        }
        if claims.kind != expected_kind {
            return Err(TokenError::KindMismatch);
        }
        Ok(claims)
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let payload = serde_json::to_vec(claims).map_err(|_| TokenError::PayloadParse)?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload);
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|_| TokenError::SecretTooShort)?;
        mac.update(payload_b64.as_bytes());
        let signature_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        Ok(format!("{payload_b64}.{signature_b64}"))
    }
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn service() -> TokenService {
        TokenService::new(SECRET, 1_000, 10_000).unwrap()
    }

    #[test]
    fn rejects_short_secret() {
        assert_eq!(
            TokenService::new(b"short", 1_000, 10_000).unwrap_err(),
            TokenError::SecretTooShort
        );
    }

    #[test]
    fn pair_round_trips_with_matching_kinds() {
        let svc = service();
        let pair = svc.issue_pair("u-1", Role::Staff, 50).unwrap();

        let access = svc.verify(&pair.access_token, TokenKind::Access, 100).unwrap();
        assert_eq!(access.user_id, "u-1");
        assert_eq!(access.role, Role::Staff);
        assert_eq!(access.kind, TokenKind::Access);
        assert_eq!(access.expires_at_ms, 1_050);

        let refresh = svc.verify(&pair.refresh_token, TokenKind::Refresh, 100).unwrap();
        assert_eq!(refresh.token_id, pair.refresh_id);
        assert_eq!(refresh.expires_at_ms, pair.refresh_expires_at_ms);
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let svc = service();
        let pair = svc.issue_pair("u-1", Role::Student, 0).unwrap();
        assert_eq!(
            svc.verify(&pair.access_token, TokenKind::Refresh, 1).unwrap_err(),
            TokenError::KindMismatch
        );
        assert_eq!(
            svc.verify(&pair.refresh_token, TokenKind::Access, 1).unwrap_err(),
            TokenError::KindMismatch
        );
    }

    #[test]
    fn expired_access_token_is_rejected() {
        let svc = service();
        let pair = svc.issue_pair("u-1", Role::Admin, 0).unwrap();
        assert_eq!(
            svc.verify(&pair.access_token, TokenKind::Access, 1_000).unwrap_err(),
            TokenError::Expired
        );
        // The refresh half outlives the access half.
        assert!(svc.verify(&pair.refresh_token, TokenKind::Refresh, 1_000).is_ok());
    }

    #[test]
    fn tampered_payload_fails_signature_check() {
        let svc = service();
        let pair = svc.issue_pair("u-1", Role::Student, 0).unwrap();
        let (_, signature) = pair.access_token.split_once('.').unwrap();
        let forged_payload = URL_SAFE_NO_PAD.encode(b"{\"user_id\":\"u-2\"}");
        let forged = format!("{forged_payload}.{signature}");
        assert_eq!(
            svc.verify(&forged, TokenKind::Access, 1).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn wrong_secret_fails_signature_check() {
        let svc = service();
        let other = TokenService::new(b"ffffffffffffffffffffffffffffffff", 1_000, 10_000).unwrap();
        let pair = svc.issue_pair("u-1", Role::Student, 0).unwrap();
        assert_eq!(
            other.verify(&pair.access_token, TokenKind::Access, 1).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn garbage_token_is_invalid_format() {
        let svc = service();
        assert_eq!(
            svc.verify("not-a-token", TokenKind::Access, 1).unwrap_err(),
            TokenError::InvalidFormat
        );
        assert_eq!(
            svc.verify(".", TokenKind::Access, 1).unwrap_err(),
            TokenError::InvalidFormat
        );
    }
}
