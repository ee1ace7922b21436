use async_trait::async_trait;

use crate::domains::conversation::Message;
use crate::error::Result;

/// A chat-completion backend that produces the next assistant turn.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the raw text of the first candidate reply.
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String>;
}
