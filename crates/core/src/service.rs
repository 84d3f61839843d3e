//! Lesson Service Facade
//!
//! The single entry point for lesson generation. It validates the request,
//! composes the instruction, makes exactly one call to the generative
//! service and normalizes the reply into a `LessonResult`.

use crate::{
    error::LessonError,
    lesson::{LessonBody, LessonRequest, LessonResult},
    llm_client::{CompletionRequest, LLMClient},
    prompt,
};
use std::sync::Arc;
use tracing::{debug, error, info};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Fixed sampling settings used for every lesson request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

pub struct LessonService {
    client: Arc<dyn LLMClient>,
    settings: GenerationSettings,
}

impl LessonService {
    pub fn new(client: Arc<dyn LLMClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    /// Generates a lesson for the request.
    ///
    /// Fails with `LessonError::Validation` before any service call when the
    /// topic is blank, and with `LessonError::OperationFailed` when the
    /// service call fails. Unstructured replies are not an error.
    pub async fn generate_lesson(
        &self,
        request: LessonRequest,
    ) -> Result<LessonResult, LessonError> {
        request.validate()?;

        info!(
            topic = %request.topic,
            level = %request.level,
            preference = %request.preference,
            model = %self.settings.model,
            "Generating lesson"
        );

        let completion = self
            .client
            .complete(CompletionRequest {
                instruction: prompt::compose(&request),
                model: self.settings.model.clone(),
                temperature: self.settings.temperature,
            })
            .await
            .map_err(|e| {
                error!(topic = %request.topic, error = %e, "Lesson generation failed");
                LessonError::OperationFailed(e)
            })?;

        let body = LessonBody::from_content(completion.content);
        debug!(structured = body.is_structured(), "Normalized lesson response");
        Ok(body.into_result())
    }
}
