use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use contracts::ApiErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication required")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Refresh token already used or revoked")]
    RefreshRejected,

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::RefreshRejected => StatusCode::UNAUTHORIZED,
            ApiError::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = ApiErrorBody {
            success: false,
            error: self.to_string(),
        };

        HttpResponse::build(status).json(body)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
