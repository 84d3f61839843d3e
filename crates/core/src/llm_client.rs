use crate::error::ServiceError;
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
};
use async_trait::async_trait;

/// A single completion call: the composed instruction plus sampling settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub instruction: String,
    pub model: String,
    pub temperature: f32,
}

/// The text returned by the generative service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub content: String,
}

/// A generic client for a text-completion service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Makes one non-streaming completion call.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ServiceError>;
}

/// An implementation of `LLMClient` for any OpenAI-compatible API.
pub struct OpenAICompatibleClient {
    client: Client<OpenAIConfig>,
}

impl OpenAICompatibleClient {
    /// Creates a new client for an OpenAI-compatible service.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration for the OpenAI client, including API key and base URL.
    pub fn new(config: OpenAIConfig) -> Self {
        Self {
            client: Client::with_config(config),
        }
    }
}

#[async_trait]
impl LLMClient for OpenAICompatibleClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ServiceError> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(request.instruction)
            .build()?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(request.model)
            .temperature(request.temperature)
            .messages(vec![message.into()])
            .build()?;

        let response = self.client.chat().create(chat_request).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ServiceError::EmptyResponse("no text content in completion".to_string())
            })?;

        Ok(Completion { content })
    }
}
