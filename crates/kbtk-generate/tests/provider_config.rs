use std::collections::HashMap;
use std::io::Write;

use config::Environment;
use kbtk_generate::config::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, ENV_PREFIX};
use kbtk_generate::{ProviderConfig, ProviderConfigError};

fn env(vars: &[(&str, &str)]) -> Environment {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Environment::with_prefix(ENV_PREFIX).source(Some(map))
}

#[test]
fn env_only_config_uses_defaults() {
    let cfg = ProviderConfig::load_with_env(None, env(&[("ANTHROPIC_API_KEY", "sk-test")])).unwrap();
    assert_eq!(cfg.api_key, "sk-test");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.max_tokens, DEFAULT_MAX_TOKENS);
    assert_eq!(cfg.messages_url(), "https://api.anthropic.com/v1/messages");
}

#[test]
fn missing_api_key_is_reported() {
    let err = ProviderConfig::load_with_env(None, env(&[])).unwrap_err();
    assert!(matches!(err, ProviderConfigError::MissingApiKey));
}

#[test]
fn env_overrides_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "api_key = \"from-file\"\nmodel = \"file-model\"\nbase_url = \"http://localhost:8080/\"\nmax_tokens = 1024"
    )
    .unwrap();

    let cfg = ProviderConfig::load_with_env(
        Some(file.path()),
        env(&[("ANTHROPIC_MODEL", "env-model")]),
    )
    .unwrap();

    assert_eq!(cfg.api_key, "from-file");
    assert_eq!(cfg.model, "env-model");
    assert_eq!(cfg.max_tokens, 1024);
    assert_eq!(cfg.count_tokens_url(), "http://localhost:8080/v1/messages/count_tokens");
}

#[test]
fn debug_output_hides_api_key() {
    let cfg = ProviderConfig::load_with_env(None, env(&[("ANTHROPIC_API_KEY", "sk-secret")])).unwrap();
    assert!(!format!("{cfg:?}").contains("sk-secret"));
}
