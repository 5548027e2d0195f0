use contracts::Role;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct MockApiConfig {
    pub server: ServerSection,
    pub tokens: TokenSection,
    pub accounts: Vec<DemoAccount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenSection {
    pub secret: String,
    #[serde(default = "default_access_ttl_secs")]
    pub access_ttl_secs: u64,
    #[serde(default = "default_refresh_ttl_secs")]
    pub refresh_ttl_secs: u64,
}

/// A seeded account the mock API accepts credentials for. Passwords live
/// in the config file in clear text; they are bcrypt-hashed at startup so
/// the login path exercises the same verification as a real backend.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoAccount {
    pub identifier: String,
    pub password: String,
    pub display_name: String,
    pub role: Role,
    #[serde(default)]
    pub school_code: Option<String>,
    #[serde(default)]
    pub school_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn default_access_ttl_secs() -> u64 {
    900
}

fn default_refresh_ttl_secs() -> u64 {
    1_209_600
}

impl MockApiConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ApiError::Config(format!("Failed to read config file: {}", e)))?;

        let config: MockApiConfig = toml::from_str(&content)
            .map_err(|e| ApiError::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }
}
