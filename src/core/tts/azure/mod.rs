mod config;
mod provider;

pub use config::{AzureOutputFormat, AzureTTSConfig, AzureVoice, DEFAULT_REGION, MAX_TEXT_LENGTH};
pub use provider::{AZURE_TTS_URL, AzureTTS};
