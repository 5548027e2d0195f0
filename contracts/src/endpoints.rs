//! Paths of the consumed auth endpoints.
//!
//! The front end only ever talks to `/api/v1/auth/...`; everything else on
//! the platform API belongs to other clients.

pub const STUDENT_LOGIN: &str = "/api/v1/auth/student/login";
pub const AGENT_LOGIN: &str = "/api/v1/auth/agent/login";
pub const ADMIN_LOGIN: &str = "/api/v1/auth/admin/login";

/// Profile validation: `GET` with a bearer access token, confirms the
/// session is still live and returns the authoritative user payload.
pub const ME: &str = "/api/v1/auth/me";

/// Token refresh: `POST` with the refresh token, rotates both tokens.
pub const REFRESH: &str = "/api/v1/auth/refresh";
