use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeBotError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("http error: {0}")]
    Http(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl RecipeBotError {
    /// True for every fault raised while talking to the completion provider.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Provider(_) | Self::Http(_) | Self::Serialization(_)
        )
    }
}

pub use crate::Result;
