use crate::domain::error::TranslatorError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub defaults: LanguageDefaults,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OllamaConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

// Web 表单和 REPL 的默认语言
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LanguageDefaults {
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            ollama: OllamaConfig::default(),
            server: ServerConfig::default(),
            defaults: LanguageDefaults::default(),
            logging: Logging::default(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LanguageDefaults {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

// Defaults
fn default_theme() -> String {
    "default".to_string()
}
fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}
fn default_model() -> String {
    "llama2".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_source_language() -> String {
    "C".to_string()
}
fn default_target_language() -> String {
    "Python".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

/// Map the config's log level to an `EnvFilter` directive.
pub fn log_filter_directive(level: &str) -> &'static str {
    match level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("code-translator").join("config.toml"))
}

/// Load the user config (or defaults) and apply environment overrides.
pub fn load_config() -> Result<Config, TranslatorError> {
    let mut config = match get_config_path() {
        Some(path) if path.exists() => match load_config_from(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse config file: {}. Using defaults.",
                    e
                );
                Config::default()
            }
        },
        _ => Config::default(),
    };

    // Logging is not up yet, so warnings go straight to stderr
    for warning in apply_env_overrides(&mut config, |key| std::env::var(key).ok()) {
        eprintln!("Warning: {}", warning);
    }
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<Config, TranslatorError> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str::<Config>(&content)?;
    if config.ollama.timeout_secs == 0 {
        return Err(TranslatorError::Config(
            "ollama.timeout_secs must be at least 1".to_string(),
        ));
    }
    Ok(config)
}

/// Apply `OLLAMA_BASE_URL`, `OLLAMA_MODEL` and `TIMEOUT` on top of the file values.
///
/// `lookup` is the variable source, normally `std::env::var`. Returns one
/// message per ignored value.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(url) = lookup("OLLAMA_BASE_URL").filter(|v| !v.trim().is_empty()) {
        config.ollama.base_url = url.trim().to_string();
    }
    if let Some(model) = lookup("OLLAMA_MODEL").filter(|v| !v.trim().is_empty()) {
        config.ollama.model = model.trim().to_string();
    }
    if let Some(timeout) = lookup("TIMEOUT") {
        match timeout.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => config.ollama.timeout_secs = secs,
            _ => warnings.push(format!("Ignoring invalid TIMEOUT value: {:?}", timeout)),
        }
    }

    warnings
}

pub fn generate_config_sample() -> Result<(), TranslatorError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        // Create directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| TranslatorError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| TranslatorError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(TranslatorError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
