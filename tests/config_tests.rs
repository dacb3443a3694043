//! 配置功能测试

use code_translator::domain::error::TranslatorError;
use code_translator::infrastructure::config::{apply_env_overrides, load_config_from, Config};
use std::collections::HashMap;
use std::io::Write;

#[test]
fn test_config_defaults() {
    // 测试配置默认值
    let config = Config::default();

    assert_eq!(config.theme, "default");
    assert_eq!(config.ollama.base_url, "http://localhost:11434");
    assert_eq!(config.ollama.model, "llama2");
    assert_eq!(config.ollama.timeout_secs, 30);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.defaults.source_language, "C");
    assert_eq!(config.defaults.target_language, "Python");
}

#[test]
fn test_logging_defaults() {
    // 测试日志默认值
    let config = Config::default();

    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
    assert!(config.logging.path.is_none());
}

#[test]
fn test_config_toml_file() {
    // 测试 TOML 配置文件, 缺省字段使用默认值
    let toml_content = r#"
theme = "plain"

[ollama]
base_url = "http://gpu-box:11434"
model = "codellama"

[defaults]
target_language = "Rust"

[logging]
enable = true
path = "/tmp/test.log"
level = "DEBUG"
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml_content.as_bytes()).unwrap();

    let config = load_config_from(file.path()).unwrap();

    assert_eq!(config.theme, "plain");
    assert_eq!(config.ollama.base_url, "http://gpu-box:11434");
    assert_eq!(config.ollama.model, "codellama");
    assert_eq!(config.ollama.timeout_secs, 30);
    assert_eq!(config.defaults.source_language, "C");
    assert_eq!(config.defaults.target_language, "Rust");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/test.log"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[ollama\nmodel = ").unwrap();

    assert!(load_config_from(file.path()).is_err());
}

#[test]
fn test_sample_config_round_trips() {
    let sample = toml::to_string_pretty(&Config::default()).unwrap();
    let parsed: Config = toml::from_str(&sample).unwrap();

    assert_eq!(parsed.ollama.model, "llama2");
    assert_eq!(parsed.server.port, 5000);
}

#[test]
fn test_env_overrides() {
    // 环境变量覆盖配置文件
    let env: HashMap<&str, &str> = HashMap::from([
        ("OLLAMA_BASE_URL", "http://remote:11434"),
        ("OLLAMA_MODEL", "mistral"),
        ("TIMEOUT", "120"),
    ]);
    let mut config = Config::default();

    let warnings = apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

    assert!(warnings.is_empty());
    assert_eq!(config.ollama.base_url, "http://remote:11434");
    assert_eq!(config.ollama.model, "mistral");
    assert_eq!(config.ollama.timeout_secs, 120);
}

#[test]
fn test_env_overrides_ignore_bad_values() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("OLLAMA_MODEL", "   "),
        ("TIMEOUT", "soon"),
    ]);
    let mut config = Config::default();

    let warnings = apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.ollama.model, "llama2");
    assert_eq!(config.ollama.timeout_secs, 30);
    // 无效的 TIMEOUT 需要给出警告
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("TIMEOUT"));
    assert!(warnings[0].contains("soon"));
}

#[test]
fn test_zero_timeout_is_warned_and_ignored() {
    let mut config = Config::default();

    let warnings = apply_env_overrides(&mut config, |key| {
        (key == "TIMEOUT").then(|| "0".to_string())
    });

    assert_eq!(config.ollama.timeout_secs, 30);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_zero_timeout_in_file_is_rejected() {
    // 超时为 0 会让每次请求立即超时
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[ollama]\ntimeout_secs = 0\n").unwrap();

    assert!(matches!(
        load_config_from(file.path()),
        Err(TranslatorError::Config(_))
    ));
}
