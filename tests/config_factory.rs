use std::io::Write;

use serde_json::json;

use recipe_bot::config::Config;
use recipe_bot::error::RecipeBotError;
use recipe_bot::persona::{DEFAULT_MODEL, RECIPE_ASSISTANT_PROMPT};
use recipe_bot::services::chat::ChatService;

fn write_config(value: serde_json::Value) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{value}").unwrap();
    file
}

#[test]
fn config_from_file_builds_chat_service() {
    let file = write_config(json!({
        "openai": {"api_key": "key", "model": "gpt-4.1-mini", "base_url": null}
    }));

    let config = Config::from_file(file.path()).unwrap();
    let persona = config.persona();
    assert_eq!(persona.model(), "gpt-4.1-mini");
    assert_eq!(persona.prompt(), RECIPE_ASSISTANT_PROMPT);

    let service = ChatService::from_config(&config).unwrap();
    assert_eq!(service.persona().model(), "gpt-4.1-mini");
}

#[test]
fn config_file_without_model_uses_default() {
    let file = write_config(json!({
        "openai": {"api_key": null, "model": null, "base_url": "http://localhost:11434/v1"}
    }));

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.persona().model(), DEFAULT_MODEL);
    assert!(ChatService::from_config(&config).is_ok());
}

#[test]
fn config_errors() {
    let file = write_config(json!({"openai": {"api_key": null, "model": null, "base_url": null}}));
    let config = Config::from_file(file.path()).unwrap();
    let err = ChatService::from_config(&config).err().unwrap();
    assert!(matches!(err, RecipeBotError::Config(_)));

    let mut bad = tempfile::NamedTempFile::new().unwrap();
    write!(bad, "{{bad}}").unwrap();
    let err = Config::from_file(bad.path()).unwrap_err();
    assert!(matches!(err, RecipeBotError::Config(_)));

    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, RecipeBotError::Config(_)));
    assert!(format!("{err}").contains("configuration error"));
}
