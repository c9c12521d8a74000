// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelConfig,
    pub fetch: FetchSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

/// Model identity and credentials. A client is built from this for every
/// submission, see [`crate::llm::ModelProvider`].
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    pub timeout_seconds: Option<u64>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            timeout_seconds: None,
        }
    }
}

// keep the key out of logs
impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Settings {
    /// Load settings from the YAML file (if any) and apply environment overrides.
    ///
    /// An explicit `path` must exist. Without one, `config.yaml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };

        settings.with_env_overrides(|key| std::env::var(key).ok())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(settings)
    }

    fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GROQ_API_KEY") {
            self.model.api_key = Some(key);
        }
        if let Some(url) = lookup("GROQ_API_URL") {
            self.model.api_url = url;
        }
        if let Some(model) = lookup("GROQ_MODEL") {
            self.model.model = model;
        }
        if let Some(address) = lookup("COVER_LETTER_ADDRESS") {
            self.server.address = address;
        }
        if let Some(port) = lookup("COVER_LETTER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("COVER_LETTER_PORT must be a valid port number"))?;
        }
        Ok(self)
    }

    pub fn with_address(mut self, address: String) -> Self {
        self.server.address = address;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.server.port = port;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8501);
        assert_eq!(settings.model.model, DEFAULT_MODEL);
        assert_eq!(settings.model.temperature, 0.0);
        assert!(settings.model.timeout_seconds.is_none());
        assert!(settings.fetch.timeout_seconds.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model:\n  model: llama-3.3-70b-versatile\nfetch:\n  timeout_seconds: 20").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.model.model, "llama-3.3-70b-versatile");
        assert_eq!(settings.model.api_url, DEFAULT_API_URL);
        assert_eq!(settings.fetch.timeout_seconds, Some(20));
        assert_eq!(settings.server.address, "127.0.0.1");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        assert!(Settings::load(Some(Path::new("/nonexistent/cover-letter.yaml"))).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_MODEL", "mixtral-8x7b-32768"),
            ("COVER_LETTER_PORT", "9000"),
        ]
        .into_iter()
        .collect();

        let settings = Settings::default()
            .with_env_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(settings.model.api_key.as_deref(), Some("gsk_test"));
        assert_eq!(settings.model.model, "mixtral-8x7b-32768");
        assert_eq!(settings.server.port, 9000);
    }

    #[test]
    fn test_invalid_port_override() {
        let result = Settings::default().with_env_overrides(|key| {
            (key == "COVER_LETTER_PORT").then(|| "not-a-port".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = ModelConfig {
            api_key: Some("gsk_secret".to_string()),
            ..ModelConfig::default()
        };
        assert!(!format!("{:?}", config).contains("gsk_secret"));
    }
}
