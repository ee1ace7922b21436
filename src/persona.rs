use crate::domains::conversation::Message;

pub const RECIPE_ASSISTANT_PROMPT: &str = include_str!("prompts/recipe_assistant.md");

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// System prompt and model identifier shared by every chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaConfig {
    prompt: String,
    model: String,
}

impl PersonaConfig {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
        }
    }

    /// The built-in recipe assistant; falls back to [`DEFAULT_MODEL`] when no model is set.
    pub fn recipe_assistant(model: Option<String>) -> Self {
        let model = model
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self::new(RECIPE_ASSISTANT_PROMPT, model)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_message(&self) -> Message {
        Message::system(self.prompt.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::conversation::Role;

    #[test]
    fn recipe_assistant_defaults_model() {
        let persona = PersonaConfig::recipe_assistant(None);
        assert_eq!(persona.model(), DEFAULT_MODEL);
        assert!(persona.prompt().contains("culinary assistant"));

        let blank = PersonaConfig::recipe_assistant(Some("  ".to_string()));
        assert_eq!(blank.model(), DEFAULT_MODEL);

        let custom = PersonaConfig::recipe_assistant(Some("gpt-4.1".to_string()));
        assert_eq!(custom.model(), "gpt-4.1");
    }

    #[test]
    fn system_message_carries_prompt() {
        let persona = PersonaConfig::new("P", "m");
        let message = persona.system_message();
        assert_eq!(message.role(), Role::System);
        assert_eq!(message.content(), "P");
    }
}
