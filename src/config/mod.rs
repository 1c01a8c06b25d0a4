//! Configuration module for voxbench
//!
//! This module handles configuration from various sources: .env files,
//! YAML files, and environment variables. Priority: YAML > ENV vars >
//! .env values > defaults.
//!
//! # Example
//! ```rust,no_run
//! use voxbench::config::AppConfig;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = AppConfig::from_env()?;
//!
//! // Load from YAML file with environment variable base
//! let config = AppConfig::from_file(Path::new("voxbench.yaml"))?;
//!
//! let key = config.get_api_key("elevenlabs")?;
//! # Ok(())
//! # }
//! ```

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;
use zeroize::Zeroize;

mod yaml;

pub use yaml::YamlConfig;

/// Configuration loading and lookup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{provider} API key not configured (set {env_var})")]
    MissingApiKey {
        provider: &'static str,
        env_var: &'static str,
    },

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}

/// Application configuration
///
/// Contains everything needed to run a synthesis, including:
/// - Default provider selection
/// - Provider API keys (Google, ElevenLabs, Azure)
/// - Azure region
/// - Output directory for audio files
/// - Optional chunk budget override
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Provider used when the CLI does not name one
    pub default_provider: String,

    /// Google Cloud API key
    pub google_api_key: Option<String>,

    /// ElevenLabs API key
    pub elevenlabs_api_key: Option<String>,

    /// Azure Speech Services subscription key from Azure Portal
    /// (Speech resource, Keys and Endpoint, Key 1 or Key 2)
    pub azure_speech_subscription_key: Option<String>,

    /// Azure region the subscription key is bound to (e.g. "eastus")
    pub azure_speech_region: Option<String>,

    /// Directory that audio output files default into
    pub output_dir: PathBuf,

    /// Chunk budget override applied to every provider
    pub chunk_max_chars: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: "google".to_string(),
            google_api_key: None,
            elevenlabs_api_key: None,
            azure_speech_subscription_key: None,
            azure_speech_region: None,
            output_dir: PathBuf::from("."),
            chunk_max_chars: None,
        }
    }
}

/// Zeroize all secret fields when the config is dropped so keys do not
/// linger in memory.
impl Drop for AppConfig {
    fn drop(&mut self) {
        if let Some(ref mut key) = self.google_api_key {
            key.zeroize();
        }
        if let Some(ref mut key) = self.elevenlabs_api_key {
            key.zeroize();
        }
        if let Some(ref mut key) = self.azure_speech_subscription_key {
            key.zeroize();
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file, when loaded by the caller at startup, supplies any
    /// variables not already present in the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(provider) = env::var("TTS_PROVIDER") {
            config.default_provider = provider;
        }
        config.google_api_key = env::var("GOOGLE_API_KEY").ok();
        config.elevenlabs_api_key = env::var("ELEVENLABS_API_KEY").ok();
        config.azure_speech_subscription_key = env::var("AZURE_SPEECH_SUBSCRIPTION_KEY").ok();
        config.azure_speech_region = env::var("AZURE_SPEECH_REGION").ok();
        if let Ok(dir) = env::var("OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(value) = env::var("CHUNK_MAX_CHARS") {
            let parsed = value.parse::<usize>().map_err(|_| {
                ConfigError::InvalidValue(format!("CHUNK_MAX_CHARS must be an integer, got {value:?}"))
            })?;
            config.chunk_max_chars = Some(parsed);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base.
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = YamlConfig::from_file(path)?;
        let mut config = Self::from_env()?;
        config.apply_yaml(yaml);
        config.validate()?;
        Ok(config)
    }

    /// Apply YAML overrides on top of this configuration.
    fn apply_yaml(&mut self, yaml: YamlConfig) {
        if let Some(provider) = yaml.provider {
            self.default_provider = provider;
        }
        if let Some(key) = yaml.google_api_key {
            self.google_api_key = Some(key);
        }
        if let Some(key) = yaml.elevenlabs_api_key {
            self.elevenlabs_api_key = Some(key);
        }
        if let Some(key) = yaml.azure_speech_subscription_key {
            self.azure_speech_subscription_key = Some(key);
        }
        if let Some(region) = yaml.azure_speech_region {
            self.azure_speech_region = Some(region);
        }
        if let Some(dir) = yaml.output_dir {
            self.output_dir = dir;
        }
        if let Some(budget) = yaml.chunk_max_chars {
            self.chunk_max_chars = Some(budget);
        }
    }

    /// Validate the merged configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_max_chars == Some(0) {
            return Err(ConfigError::InvalidValue(
                "chunk_max_chars must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the API key for a specific provider.
    pub fn get_api_key(&self, provider: &str) -> Result<String, ConfigError> {
        match provider.to_lowercase().as_str() {
            "google" | "google-cloud" | "google_cloud" | "gcp" => {
                self.google_api_key
                    .clone()
                    .ok_or(ConfigError::MissingApiKey {
                        provider: "Google",
                        env_var: "GOOGLE_API_KEY",
                    })
            }
            "elevenlabs" | "eleven-labs" | "eleven_labs" | "11labs" => {
                self.elevenlabs_api_key
                    .clone()
                    .ok_or(ConfigError::MissingApiKey {
                        provider: "ElevenLabs",
                        env_var: "ELEVENLABS_API_KEY",
                    })
            }
            "azure" | "microsoft-azure" | "microsoft_azure" => self
                .azure_speech_subscription_key
                .clone()
                .ok_or(ConfigError::MissingApiKey {
                    provider: "Azure Speech",
                    env_var: "AZURE_SPEECH_SUBSCRIPTION_KEY",
                }),
            _ => Err(ConfigError::UnsupportedProvider(provider.to_string())),
        }
    }

    /// Get the Azure Speech Services region, defaulting to "eastus".
    ///
    /// The region must match where the subscription key was created.
    pub fn azure_region(&self) -> String {
        self.azure_speech_region
            .clone()
            .unwrap_or_else(|| "eastus".to_string())
    }
}
