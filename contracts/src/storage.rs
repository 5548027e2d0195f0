//! Names of the persisted session keys.
//!
//! These are kept verbatim from the browser implementation of the platform
//! (its `localStorage` keys) so a vault file remains readable next to traffic
//! captures and support tickets that mention the original names. The value
//! under [`USER_KEY`] is a JSON-encoded [`crate::AuthUser`]; the two token
//! keys hold opaque token strings.

pub const USER_KEY: &str = "melio_user";
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
