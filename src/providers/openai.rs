use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContent,
    CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
};

use crate::domains::conversation::{Message, Role};
use crate::error::{RecipeBotError, Result};
use crate::interfaces::providers::CompletionProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for any server that speaks the OpenAI `/chat/completions` format.
#[derive(Clone)]
pub struct OpenAiProvider {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn raw_chat_completion(&self, request: &CreateChatCompletionRequest) -> Result<Value> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let mut builder = self.http.post(url).json(request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RecipeBotError::Http(format!("Chat completion transport failed: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RecipeBotError::Http(format!("Chat completion read failed: {e}")))?;

        if !status.is_success() {
            return Err(RecipeBotError::Provider(format!(
                "Chat completion failed ({status}): {body}"
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            RecipeBotError::Serialization(format!("Chat completion decode failed: {e}"))
        })
    }

    fn extract_text_from_value(response: &Value) -> Option<String> {
        response
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|text| text.to_string())
    }

    fn build_system_message(content: &str) -> Result<ChatCompletionRequestMessage> {
        let message = ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| RecipeBotError::Runtime(e.to_string()))?;
        Ok(ChatCompletionRequestMessage::System(message))
    }

    fn build_user_text_message(content: &str) -> Result<ChatCompletionRequestMessage> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Text(
                content.to_string(),
            ))
            .build()
            .map_err(|e| RecipeBotError::Runtime(e.to_string()))?;
        Ok(ChatCompletionRequestMessage::User(message))
    }

    fn build_assistant_message(content: &str) -> Result<ChatCompletionRequestMessage> {
        let message = ChatCompletionRequestAssistantMessageArgs::default()
            .content(ChatCompletionRequestAssistantMessageContent::Text(
                content.to_string(),
            ))
            .build()
            .map_err(|e| RecipeBotError::Runtime(e.to_string()))?;
        Ok(ChatCompletionRequestMessage::Assistant(message))
    }

    fn build_request(model: &str, messages: &[Message]) -> Result<CreateChatCompletionRequest> {
        let request_messages = messages
            .iter()
            .map(|message| match message.role() {
                Role::System => Self::build_system_message(message.content()),
                Role::User => Self::build_user_text_message(message.content()),
                Role::Assistant => Self::build_assistant_message(message.content()),
            })
            .collect::<Result<Vec<_>>>()?;

        CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(request_messages)
            .build()
            .map_err(|e| RecipeBotError::Runtime(e.to_string()))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String> {
        let request = Self::build_request(model, messages)?;
        debug!(model, turns = messages.len(), "Sending chat completion");

        let response = self.raw_chat_completion(&request).await?;
        Self::extract_text_from_value(&response)
            .ok_or_else(|| RecipeBotError::Provider("Empty chat response".to_string()))
    }
}
