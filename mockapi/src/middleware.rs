use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, HttpMessage,
};

use crate::error::ApiError;
use crate::token::{now_ms, TokenKind, TokenService};

pub async fn require_access_token(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    // Extract the bearer token from the Authorization header
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|value| value.to_string())
        .ok_or(ApiError::MissingToken)?;

    // Get the token service from app data
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| ApiError::Internal("Token service not available".to_string()))?;

    let claims = tokens
        .verify(&token, TokenKind::Access, now_ms())
        .map_err(|_| ApiError::InvalidToken)?;

    // Store the verified claims in request extensions for handlers to use
    req.extensions_mut().insert(claims);

    next.call(req).await
}
