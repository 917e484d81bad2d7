use std::path::PathBuf;

use serial_test::serial;

use doclib_ingest::config::{IngestConfig, DEFAULT_BASE_URL};
use doclib_ingest::error::IngestError;

fn from_env_with_defaults() -> Result<IngestConfig, IngestError> {
    IngestConfig::from_env(
        PathBuf::from("files"),
        "My Knowledge Base".to_string(),
        "All my important files".to_string(),
    )
}

#[test]
#[serial]
fn missing_api_key_is_a_configuration_error() {
    std::env::remove_var("MISTRAL_API_KEY");

    let err = from_env_with_defaults().expect_err("Config should fail without credential");
    match err {
        IngestError::Configuration(msg) => {
            assert!(
                msg.contains("MISTRAL_API_KEY"),
                "Error should name the missing variable, got: {msg}"
            );
        }
        other => panic!("Expected Configuration error, got: {other:?}"),
    }
}

#[test]
#[serial]
fn empty_api_key_is_a_configuration_error() {
    std::env::set_var("MISTRAL_API_KEY", "");

    let err = from_env_with_defaults().expect_err("Config should fail on empty credential");
    assert!(matches!(err, IngestError::Configuration(_)));

    std::env::remove_var("MISTRAL_API_KEY");
}

#[test]
#[serial]
fn valid_env_yields_defaults() {
    std::env::set_var("MISTRAL_API_KEY", "test-key");
    std::env::remove_var("MISTRAL_BASE_URL");

    let config = from_env_with_defaults().expect("Config should load");
    assert_eq!(config.api_key, "test-key");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.files_dir, PathBuf::from("files"));
    assert_eq!(config.library_name, "My Knowledge Base");
    assert_eq!(config.library_description, "All my important files");

    std::env::remove_var("MISTRAL_API_KEY");
}

#[test]
#[serial]
fn base_url_override_is_honoured() {
    std::env::set_var("MISTRAL_API_KEY", "test-key");
    std::env::set_var("MISTRAL_BASE_URL", "http://localhost:8080");

    let config = from_env_with_defaults().expect("Config should load");
    assert_eq!(config.base_url, "http://localhost:8080");

    std::env::remove_var("MISTRAL_API_KEY");
    std::env::remove_var("MISTRAL_BASE_URL");
}
