use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::domains::conversation::{Conversation, Message, Role};
use crate::error::Result;
use crate::interfaces::providers::CompletionProvider;
use crate::persona::PersonaConfig;

/// Ensures the conversation opens with a system message.
///
/// A history whose first turn is already `system` is returned untouched, so a
/// caller-supplied prompt wins over the persona and is never duplicated.
pub fn normalize(history: Conversation, persona: &PersonaConfig) -> Conversation {
    if history
        .first()
        .is_some_and(|message| message.role() == Role::System)
    {
        return history;
    }

    let mut normalized = Vec::with_capacity(history.len() + 2);
    normalized.push(persona.system_message());
    normalized.extend(history);
    normalized
}

/// Runs one completion turn and returns the history with the reply appended.
///
/// Provider errors are returned as-is; nothing is retried.
pub async fn respond(
    provider: &dyn CompletionProvider,
    persona: &PersonaConfig,
    history: Conversation,
) -> Result<Conversation> {
    let supplied = history.len();
    let mut conversation = normalize(history, persona);
    debug!(
        model = persona.model(),
        turns = conversation.len(),
        injected_system_prompt = conversation.len() != supplied,
        "Requesting assistant turn"
    );

    let reply = provider.complete(persona.model(), &conversation).await?;
    let reply = reply.trim();
    debug!(reply_bytes = reply.len(), "Received assistant turn");

    conversation.push(Message::assistant(reply));
    Ok(conversation)
}

#[derive(Clone)]
pub struct ChatService {
    provider: Arc<dyn CompletionProvider>,
    persona: Arc<PersonaConfig>,
}

impl ChatService {
    pub fn new(provider: Arc<dyn CompletionProvider>, persona: Arc<PersonaConfig>) -> Self {
        Self { provider, persona }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let provider = config.provider()?;
        Ok(Self::new(Arc::new(provider), Arc::new(config.persona())))
    }

    pub fn persona(&self) -> &PersonaConfig {
        &self.persona
    }

    pub async fn respond(&self, history: Conversation) -> Result<Conversation> {
        respond(self.provider.as_ref(), &self.persona, history).await
    }
}
