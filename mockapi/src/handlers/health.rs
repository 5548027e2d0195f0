use actix_web::{get, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{directory::AccountDirectory, error::Result, registry::RefreshRegistry};

/// Startup timestamp, registered as app data so the health endpoint can
/// report uptime.
#[derive(Debug, Clone, Copy)]
pub struct StartedAt(pub DateTime<Utc>);

impl StartedAt {
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub seeded_accounts: usize,
    pub active_refresh_tokens: usize,
    pub uptime_secs: i64,
}

#[get("/health")]
pub async fn health_check(
    directory: web::Data<AccountDirectory>,
    registry: web::Data<RefreshRegistry>,
    started_at: Option<web::Data<StartedAt>>,
) -> Result<HttpResponse> {
    let uptime_secs = started_at
        .map(|s| (Utc::now() - s.0).num_seconds())
        .unwrap_or(0);

    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        seeded_accounts: directory.len(),
        active_refresh_tokens: registry.active_count(),
        uptime_secs,
    };

    Ok(HttpResponse::Ok().json(response))
}
