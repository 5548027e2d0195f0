use actix_web::{post, web, HttpResponse};
use contracts::{Audience, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, Role};

use crate::{
    directory::AccountDirectory,
    error::{ApiError, Result},
    registry::RefreshRegistry,
    token::{now_ms, TokenKind, TokenService},
};

/// Role a given login endpoint will hand tokens out for. Accounts of any
/// other role get the same 401 as a wrong password.
fn expected_role(audience: Audience) -> Role {
    match audience {
        Audience::Student => Role::Student,
        Audience::Agent => Role::Staff,
        Audience::Admin => Role::Admin,
    }
}

async fn login_for(
    audience: Audience,
    req: web::Json<LoginRequest>,
    directory: &AccountDirectory,
    tokens: &TokenService,
    registry: &RefreshRegistry,
) -> Result<HttpResponse> {
    log::info!("Login attempt on {} endpoint: {}", audience, req.identifier);

    let user = directory.authenticate(&req.identifier, &req.password)?;

    if user.role != expected_role(audience) {
        log::warn!(
            "Rejected {} account on {} login endpoint: {}",
            user.role,
            audience,
            req.identifier
        );
        return Err(ApiError::InvalidCredentials);
    }

    let pair = tokens
        .issue_pair(&user.id, user.role, now_ms())
        .map_err(|err| ApiError::Internal(format!("Failed to issue tokens: {err}")))?;
    registry.register(&pair.refresh_id, &user.id, pair.refresh_expires_at_ms);

    log::info!("Successful login: {} ({})", req.identifier, user.role);

    Ok(HttpResponse::Ok().json(LoginResponse {
        user,
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}

#[post("/student/login")]
pub async fn student_login(
    req: web::Json<LoginRequest>,
    directory: web::Data<AccountDirectory>,
    tokens: web::Data<TokenService>,
    registry: web::Data<RefreshRegistry>,
) -> Result<HttpResponse> {
    login_for(Audience::Student, req, &directory, &tokens, &registry).await
}

#[post("/agent/login")]
pub async fn agent_login(
    req: web::Json<LoginRequest>,
    directory: web::Data<AccountDirectory>,
    tokens: web::Data<TokenService>,
    registry: web::Data<RefreshRegistry>,
) -> Result<HttpResponse> {
    login_for(Audience::Agent, req, &directory, &tokens, &registry).await
}

#[post("/admin/login")]
pub async fn admin_login(
    req: web::Json<LoginRequest>,
    directory: web::Data<AccountDirectory>,
    tokens: web::Data<TokenService>,
    registry: web::Data<RefreshRegistry>,
) -> Result<HttpResponse> {
    login_for(Audience::Admin, req, &directory, &tokens, &registry).await
}

/// Exchanges a live refresh token for a new access/refresh pair. The old
/// refresh token is consumed; presenting it a second time yields 401.
#[post("/refresh")]
pub async fn refresh(
    req: web::Json<RefreshRequest>,
    directory: web::Data<AccountDirectory>,
    tokens: web::Data<TokenService>,
    registry: web::Data<RefreshRegistry>,
) -> Result<HttpResponse> {
    let now = now_ms();

    let claims = tokens
        .verify(&req.refresh_token, TokenKind::Refresh, now)
        .map_err(|_| ApiError::InvalidToken)?;

    if !registry.consume(&claims.token_id, now) {
        log::warn!(
            "Rejected consumed or revoked refresh token for user {}",
            claims.user_id
        );
        return Err(ApiError::RefreshRejected);
    }

    let user = directory
        .find_by_id(&claims.user_id)
        .ok_or(ApiError::InvalidToken)?;

    let pair = tokens
        .issue_pair(&user.id, user.role, now)
        .map_err(|err| ApiError::Internal(format!("Failed to issue tokens: {err}")))?;
    registry.register(&pair.refresh_id, &user.id, pair.refresh_expires_at_ms);

    log::info!("Rotated refresh token for user {}", user.id);

    Ok(HttpResponse::Ok().json(RefreshResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}
