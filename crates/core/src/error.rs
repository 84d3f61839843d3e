//! Error types for lesson generation.

use async_openai::error::OpenAIError;
use thiserror::Error;

/// A failure reported by the generative text service.
///
/// The kinds exist for logging and diagnostics only. `LessonService` treats
/// all of them the same way.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("rate limit or quota exceeded: {0}")]
    RateLimited(String),
    #[error("malformed request: {0}")]
    InvalidRequest(String),
    #[error("empty response: {0}")]
    EmptyResponse(String),
}

/// Errors surfaced by `LessonService::generate_lesson`.
#[derive(Debug, Error)]
pub enum LessonError {
    /// The topic was empty or whitespace-only. No service call was made.
    #[error("topic must not be empty")]
    Validation,
    /// The generative service call failed.
    #[error("Failed to generate lesson: {0}")]
    OperationFailed(#[from] ServiceError),
}

impl From<OpenAIError> for ServiceError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Reqwest(e) => ServiceError::Network(e.to_string()),
            OpenAIError::ApiError(api) => {
                let kind = api
                    .code
                    .as_deref()
                    .or(api.r#type.as_deref())
                    .unwrap_or_default()
                    .to_lowercase();
                if kind.contains("api_key") || kind.contains("auth") {
                    ServiceError::Authentication(api.message)
                } else if kind.contains("quota") || kind.contains("rate_limit") {
                    ServiceError::RateLimited(api.message)
                } else {
                    ServiceError::InvalidRequest(api.message)
                }
            }
            other => ServiceError::InvalidRequest(other.to_string()),
        }
    }
}
