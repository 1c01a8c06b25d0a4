use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// YAML configuration structure
///
/// All fields are optional to allow partial configuration; anything left
/// out keeps its environment-derived value.
///
/// # Example YAML structure
/// ```yaml
/// provider: elevenlabs
///
/// google_api_key: "your-google-key"
/// elevenlabs_api_key: "your-elevenlabs-key"
/// azure_speech_subscription_key: "your-azure-key"
/// azure_speech_region: "westus2"
///
/// output_dir: "./audio"
/// chunk_max_chars: 1500
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    /// Default provider name
    pub provider: Option<String>,
    /// Google Cloud API key
    pub google_api_key: Option<String>,
    /// ElevenLabs API key
    pub elevenlabs_api_key: Option<String>,
    /// Azure Speech Services subscription key from Azure Portal
    pub azure_speech_subscription_key: Option<String>,
    /// Azure region where the Speech resource is deployed
    /// (the subscription key is tied to this specific region)
    pub azure_speech_region: Option<String>,
    /// Directory audio output files default into
    pub output_dir: Option<PathBuf>,
    /// Chunk budget override applied to every provider
    pub chunk_max_chars: Option<usize>,
}

impl YamlConfig {
    /// Load YAML configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
