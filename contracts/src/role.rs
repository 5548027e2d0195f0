//! Roles asserted by the API and the login audiences that reach it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role the API asserts about an authenticated user.
///
/// Serialized in lowercase on the wire and in local storage. Unknown role
/// strings fail deserialization on purpose: the front end must never invent
/// a role for a user the API did not describe.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Staff,
    Admin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Student, Self::Staff, Self::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Staff => "staff",
            Self::Admin => "admin",
        }
    }

    /// French display label used by the screens.
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Élève",
            Self::Staff => "Équipe éducative",
            Self::Admin => "Administration",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "staff" => Ok(Self::Staff),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleParseError(raw.to_string())),
        }
    }
}

/// Which login endpoint a credential pair is sent to.
///
/// "Agent" is the API-side name for staff accounts, kept from the legacy
/// agent portal. Distinct from [`Role`]: the audience is what the client
/// claims when logging in, the role is what the API asserts back.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Student,
    Agent,
    Admin,
}

impl Audience {
    pub const ALL: [Self; 3] = [Self::Student, Self::Agent, Self::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Agent => "agent",
            Self::Admin => "admin",
        }
    }

    /// Path of the login endpoint serving this audience.
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Student => crate::endpoints::STUDENT_LOGIN,
            Self::Agent => crate::endpoints::AGENT_LOGIN,
            Self::Admin => crate::endpoints::ADMIN_LOGIN,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"staff\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn unknown_role_fails_deserialization() {
        let result: Result<Role, _> = serde_json::from_str("\"superuser\"");
        assert!(result.is_err());
    }

    #[test]
    fn role_from_str_accepts_padded_input() {
        assert_eq!(" Staff ".parse::<Role>().unwrap(), Role::Staff);
        assert!("teacher".parse::<Role>().is_err());
    }

    #[test]
    fn audience_login_paths_are_distinct() {
        let paths: Vec<&str> = Audience::ALL.iter().map(|a| a.login_path()).collect();
        assert_eq!(paths.len(), 3);
        assert!(paths.windows(2).all(|pair| pair[0] != pair[1]));
        assert!(paths.iter().all(|p| p.starts_with("/api/v1/auth/")));
    }
}
