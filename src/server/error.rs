use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::model::ErrorResponse;
use crate::utils::error::AppError;

pub const OPENROUTER_KEY_MISSING: &str = "OpenRouter API key not configured";
pub const GITHUB_TOKEN_MISSING: &str = "GitHub token not configured";
pub const GENERATION_FAILED: &str = "Failed to generate README";
pub const SEARCH_FAILED: &str = "Failed to search repositories";

/// Request failure at the gateway boundary. Whatever the internal cause,
/// callers only ever see the uniform `{"error": ...}` JSON body; upstream
/// detail goes to the log.
#[derive(Debug)]
pub enum GatewayError {
    MissingOpenRouterKey,
    MissingGithubToken,
    /// Caller-supplied input was unusable; the message is safe to expose.
    Validation(String),
    Generation(AppError),
    Search(AppError),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::MissingOpenRouterKey
            | GatewayError::MissingGithubToken
            | GatewayError::Generation(_)
            | GatewayError::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &str {
        match self {
            GatewayError::MissingOpenRouterKey => OPENROUTER_KEY_MISSING,
            GatewayError::MissingGithubToken => GITHUB_TOKEN_MISSING,
            GatewayError::Validation(message) => message,
            GatewayError::Generation(_) => GENERATION_FAILED,
            GatewayError::Search(_) => SEARCH_FAILED,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            GatewayError::Generation(source) => {
                tracing::error!("❌ README generation failed: {}", source);
            }
            GatewayError::Search(source) => {
                tracing::error!("❌ Repository search failed: {}", source);
            }
            GatewayError::Validation(message) => {
                tracing::debug!("Rejected request: {}", message);
            }
            other => {
                tracing::error!("❌ {}", other.public_message());
            }
        }

        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_parts(error: GatewayError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        (status, body.error)
    }

    #[tokio::test]
    async fn test_missing_credentials_map_to_500() {
        let (status, message) = response_parts(GatewayError::MissingOpenRouterKey).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, OPENROUTER_KEY_MISSING);

        let (status, message) = response_parts(GatewayError::MissingGithubToken).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, GITHUB_TOKEN_MISSING);
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_given_message() {
        let error = GatewayError::Validation("Search query is required".to_string());
        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Search query is required");
    }

    #[tokio::test]
    async fn test_upstream_failures_hide_details() {
        let error = GatewayError::Generation(AppError::UpstreamStatusError {
            status: 429,
            body: "secret upstream detail".to_string(),
        });
        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, GENERATION_FAILED);
        assert!(!message.contains("secret"));

        let error = GatewayError::Search(AppError::UpstreamStatusError {
            status: 403,
            body: "secret upstream detail".to_string(),
        });
        let (status, message) = response_parts(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, SEARCH_FAILED);
    }
}
