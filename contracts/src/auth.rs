//! Request and response bodies of the consumed auth endpoints.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Credentials sent to any of the three login endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// The user payload returned by the API and mirrored into local storage.
///
/// School fields are absent for accounts not attached to a school
/// (platform administrators); email is absent for most student accounts.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub display_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Successful login: the user plus both session tokens.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub user: AuthUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Returned by the profile-validation endpoint for a live access token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    pub user: AuthUser,
}

/// Body of the refresh endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Refresh rotates both tokens; the previous refresh token is dead after this.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Error envelope used by every endpoint on failure.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_login_response() {
        let raw = r#"{
            "user": {
                "id": "usr-4f2a",
                "display_name": "Karim Benali",
                "role": "staff",
                "school_code": "0751234A",
                "school_id": "sch-0751234A",
                "email": "k.benali@exemple.fr"
            },
            "access_token": "eyJhbGciOi.access",
            "refresh_token": "eyJhbGciOi.refresh"
        }"#;

        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.user.role, Role::Staff);
        assert_eq!(response.user.school_code.as_deref(), Some("0751234A"));
        assert_eq!(response.access_token, "eyJhbGciOi.access");
    }

    #[test]
    fn optional_user_fields_may_be_absent() {
        let raw = r#"{
            "id": "usr-admin",
            "display_name": "Sophie Marchand",
            "role": "admin"
        }"#;

        let user: AuthUser = serde_json::from_str(raw).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.school_code.is_none());
        assert!(user.school_id.is_none());
        assert!(user.email.is_none());
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let user = AuthUser {
            id: "usr-1".to_string(),
            display_name: "Lina Moreau".to_string(),
            role: Role::Student,
            school_code: Some("0751234A".to_string()),
            school_id: None,
            email: None,
        };

        let encoded = serde_json::to_string(&user).unwrap();
        assert!(encoded.contains("school_code"));
        assert!(!encoded.contains("school_id"));
        assert!(!encoded.contains("email"));
    }

    #[test]
    fn decodes_error_envelope() {
        let raw = r#"{ "success": false, "error": "Invalid credentials" }"#;
        let body: ApiErrorBody = serde_json::from_str(raw).unwrap();
        assert!(!body.success);
        assert_eq!(body.error, "Invalid credentials");
    }
}
