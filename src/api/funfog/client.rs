use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client as HttpClient;
use tracing::warn;

use super::models::{ApiError, TransferOutcome, TransferRequest};

/// FunFog asset API client for in-game token transfers
pub struct FunfogClient {
    http_client: HttpClient,
    authorization: String,
    base_url: String,
}

impl FunfogClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://funfog.xter.io/asset/v1";
    const USER_AGENT: &'static str = "Apifox/1.0.0 (https://apifox.com)";

    /// Create a new FunFog API client
    pub fn new(authorization: String) -> Self {
        Self::with_base_url(authorization, Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(authorization: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            authorization,
            base_url,
        }
    }

    /// Create default headers with authorization
    ///
    /// The credential goes into `Authorization` verbatim; the endpoint
    /// expects no `Bearer` prefix.
    fn create_headers(&self) -> Result<HeaderMap, String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(Self::USER_AGENT));

        let auth_value = HeaderValue::from_str(&self.authorization)
            .map_err(|e| format!("Failed to create auth header: {}", e))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => {
                // Try to parse JSON error
                if let Ok(err_json) = serde_json::from_str::<serde_json::Value>(&body_text) {
                    let message = err_json
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or(&body_text);
                    ApiError::BadRequest(message.to_string())
                } else {
                    ApiError::BadRequest(body_text)
                }
            }
            401 => ApiError::Unauthorized(body_text),
            403 => ApiError::Forbidden(body_text),
            404 => ApiError::NotFound(body_text),
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, body_text)
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// POST /ft/tokens/balance/game/transfer
    ///
    /// Moves token from a game-side account into a player account. The
    /// response body is surfaced as raw JSON, not validated against a
    /// schema; callers decide what to do with a failed transfer.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferOutcome, ApiError> {
        let url = format!("{}/ft/tokens/balance/game/transfer", self.base_url);
        let headers = self.create_headers().map_err(ApiError::RequestError)?;

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        Ok(TransferOutcome {
            status: status.as_u16(),
            body,
        })
    }
}
