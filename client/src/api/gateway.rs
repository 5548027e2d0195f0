//! HTTP gateway to the Melio auth endpoints.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use contracts::{
    endpoints, Audience, LoginRequest, LoginResponse, ProfileResponse, RefreshRequest,
    RefreshResponse,
};

use crate::settings::ApiSettings;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The API answered 401: credentials or token were rejected.
    #[error("request was rejected as unauthorized")]
    Unauthorized,
    /// Any other non-success status.
    #[error("server answered with status {status}")]
    Status { status: u16 },
    /// The request never completed (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// A success status carried a body we could not decode.
    #[error("unreadable response body: {0}")]
    Decode(String),
}

pub struct AuthGateway {
    http: reqwest::Client,
    base_url: String,
}

impl AuthGateway {
    pub fn new(settings: &ApiSettings) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Posts credentials to the login endpoint of the given audience.
    pub async fn login(
        &self,
        audience: Audience,
        credentials: &LoginRequest,
    ) -> Result<LoginResponse, GatewayError> {
        let response = self
            .http
            .post(self.url(audience.login_path()))
            .json(credentials)
            .send()
            .await
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        Self::decode(response).await
    }

    /// Asks the API who the bearer of `access_token` is. A 401 here means
    /// the token has gone stale.
    pub async fn validate(&self, access_token: &str) -> Result<ProfileResponse, GatewayError> {
        let response = self
            .http
            .get(self.url(endpoints::ME))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        Self::decode(response).await
    }

    /// Exchanges a refresh token for a new token pair. The old refresh
    /// token is dead afterwards whether or not this call succeeds.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, GatewayError> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        let response = self
            .http
            .post(self.url(endpoints::REFRESH))
            .json(&body)
            .send()
            .await
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(GatewayError::Unauthorized);
        }
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }
}
