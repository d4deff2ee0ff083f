//! Config tests.

use crate::config::bot_config::BotConfig;
use crate::config::{DEFAULT_CLEARED_GREETING, DEFAULT_CORPUS_PATH, DEFAULT_SESSION_GREETING};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "HUGGING_FACE_TOKEN",
    "MODEL_HUB_ID",
    "HF_INFERENCE_URL",
    "LOG_FILE",
    "CORPUS_PATH",
    "SESSION_GREETING",
    "CLEARED_GREETING",
    "RETRIEVAL_STOP_WORDS",
    "RETRIEVAL_MIN_SCORE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("HUGGING_FACE_TOKEN", "hf_test_token");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_ok());

    assert_eq!(config.log_file(), "logs/agro-bot.log");
    assert_eq!(config.corpus_path(), DEFAULT_CORPUS_PATH);
    assert_eq!(config.session_greeting(), DEFAULT_SESSION_GREETING);
    assert_eq!(config.cleared_greeting(), DEFAULT_CLEARED_GREETING);
    assert_eq!(config.model_hub_id(), "TamandaKaunda/MSCE-Agriculture-T5");
    assert_eq!(
        config.generation().inference_base_url,
        "https://api-inference.huggingface.co"
    );
    assert_eq!(config.retrieval().min_score, 2);
    assert!(config.retrieval().stop_words.contains(&"agoforstry".to_string()));

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("HUGGING_FACE_TOKEN", "hf_custom");
    env::set_var("MODEL_HUB_ID", "org/other-t5");
    env::set_var("CORPUS_PATH", "/data/qa.json");
    env::set_var("SESSION_GREETING", "Hello student");
    env::set_var("RETRIEVAL_STOP_WORDS", "What, IS ,,the");
    env::set_var("RETRIEVAL_MIN_SCORE", "3");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.generation().hugging_face_token, "hf_custom");
    assert_eq!(config.model_hub_id(), "org/other-t5");
    assert_eq!(config.corpus_path(), "/data/qa.json");
    assert_eq!(config.session_greeting(), "Hello student");
    assert_eq!(config.retrieval().stop_words, vec!["what", "is", "the"]);
    assert_eq!(config.retrieval().min_score, 3);
    assert_eq!(config.retrieval().retriever().min_score(), 3);

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("HUGGING_FACE_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();
    assert_eq!(config.generation().hugging_face_token, "override_token");

    clear_env();
}

#[test]
#[serial]
fn test_missing_token_is_error() {
    clear_env();
    let err = BotConfig::load(None).err().unwrap();
    assert!(err.to_string().contains("HUGGING_FACE_TOKEN"));
}

#[test]
#[serial]
fn test_validate_min_score_zero() {
    clear_env();
    env::set_var("HUGGING_FACE_TOKEN", "hf_test_token");
    env::set_var("RETRIEVAL_MIN_SCORE", "0");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_min_score_not_a_number() {
    clear_env();
    env::set_var("HUGGING_FACE_TOKEN", "hf_test_token");
    env::set_var("RETRIEVAL_MIN_SCORE", "two");

    assert!(BotConfig::load(None).is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_inference_url_invalid() {
    clear_env();
    env::set_var("HUGGING_FACE_TOKEN", "hf_test_token");
    env::set_var("HF_INFERENCE_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}
