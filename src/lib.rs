pub mod config;
pub mod daemon;
pub mod domains;
pub mod error;
pub mod interfaces;
pub mod logging;
pub mod persona;
pub mod providers;
pub mod services;

pub type Result<T> = std::result::Result<T, error::RecipeBotError>;
