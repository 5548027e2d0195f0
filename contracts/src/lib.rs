//! Shared vocabulary between the Melio front end and the auth API it consumes.
//!
//! Everything the two sides agree on lives here: the role and audience enums,
//! the request/response bodies of the `/api/v1/auth` endpoints, the error
//! envelope, and the names of the persisted storage keys.

pub mod auth;
pub mod endpoints;
pub mod role;
pub mod storage;

pub use auth::{
    ApiErrorBody, AuthUser, LoginRequest, LoginResponse, ProfileResponse, RefreshRequest,
    RefreshResponse,
};
pub use role::{Audience, Role, RoleParseError};
pub use storage::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};

/// Returns the contracts crate version string.
pub fn contracts_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
