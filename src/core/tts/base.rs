//! Base types shared by all TTS providers.
//!
//! Every provider implements the [`SpeechSynthesizer`] trait: one
//! synchronous request/response round trip that turns a piece of text
//! into audio bytes. Streaming synthesis, retries, and caching are out of
//! scope; a provider either returns the audio for the given text or an
//! error describing why it could not.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Result type for TTS operations.
pub type TTSResult<T> = Result<T, TTSError>;

/// Errors produced by TTS providers.
#[derive(Debug, Error)]
pub enum TTSError {
    /// Provider was constructed with unusable configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Provider returned status {status}: {body}")]
    Provider { status: u16, body: String },

    /// The provider answered 2xx but the payload could not be decoded.
    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    /// Writing synthesized audio to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input text type accepted by synthesis endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextType {
    /// Plain text input
    #[default]
    #[serde(rename = "text")]
    Text,
    /// SSML (Speech Synthesis Markup Language) input
    #[serde(rename = "ssml")]
    Ssml,
}

impl TextType {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Ssml => "ssml",
        }
    }

    /// Parse from string.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ssml" => Self::Ssml,
            _ => Self::Text,
        }
    }
}

impl std::fmt::Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provider-agnostic TTS configuration.
///
/// Provider-specific knobs (exact voice enums, output formats, regional
/// endpoints) are parsed from these loosely-typed fields by each
/// provider's constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTSConfig {
    /// Provider name (e.g. "google", "elevenlabs", "azure")
    #[serde(default)]
    pub provider: String,

    /// API key or subscription key for the provider
    #[serde(default)]
    pub api_key: String,

    /// Voice identifier or friendly voice name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,

    /// BCP-47 language code override (defaults to the voice's language)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    /// Provider model identifier, where applicable
    #[serde(default)]
    pub model: String,

    /// Requested audio output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_format: Option<String>,

    /// Regional deployment (Azure subscription keys are region-bound)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Whether the submitted text is plain text or raw SSML
    #[serde(default)]
    pub text_type: TextType,

    /// Endpoint override, mainly for pointing tests at a local server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
}

impl Default for TTSConfig {
    fn default() -> Self {
        Self {
            provider: String::new(),
            api_key: String::new(),
            voice_id: None,
            language_code: None,
            model: String::new(),
            audio_format: None,
            region: None,
            text_type: TextType::Text,
            endpoint: None,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Build the shared HTTP client for a provider.
pub(crate) fn build_http_client(config: &TTSConfig) -> TTSResult<reqwest::Client> {
    let timeout = config
        .request_timeout
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()?;
    Ok(client)
}

/// Map a provider HTTP response to audio bytes or a [`TTSError`].
pub(crate) async fn response_bytes(response: reqwest::Response) -> TTSResult<Bytes> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TTSError::Provider {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.bytes().await?)
}

/// Uniform synthesis capability implemented by every provider.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Canonical provider name, as accepted by the factory.
    fn name(&self) -> &'static str;

    /// Per-request character budget enforced by the provider's endpoint,
    /// if any. Callers split longer text before submission.
    fn max_chars_per_request(&self) -> Option<usize> {
        None
    }

    /// Synthesize `text` into audio bytes with one remote call.
    async fn synthesize(&self, text: &str) -> TTSResult<Bytes>;

    /// Static metadata about the provider.
    fn provider_info(&self) -> serde_json::Value;
}

/// Boxed synthesizer as returned by the factory.
pub type BoxedSynthesizer = Box<dyn SpeechSynthesizer>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_type_parsing() {
        assert_eq!(TextType::from_str_or_default("ssml"), TextType::Ssml);
        assert_eq!(TextType::from_str_or_default("SSML"), TextType::Ssml);
        assert_eq!(TextType::from_str_or_default("text"), TextType::Text);
        assert_eq!(TextType::from_str_or_default("unknown"), TextType::Text);
        assert_eq!(TextType::Ssml.as_str(), "ssml");
    }

    #[test]
    fn test_config_default_timeout() {
        let config = TTSConfig::default();
        assert_eq!(config.request_timeout, Some(DEFAULT_REQUEST_TIMEOUT_SECS));
        assert_eq!(config.text_type, TextType::Text);
    }

    #[test]
    fn test_build_http_client() {
        let config = TTSConfig::default();
        assert!(build_http_client(&config).is_ok());

        let config = TTSConfig {
            request_timeout: Some(5),
            ..Default::default()
        };
        assert!(build_http_client(&config).is_ok());
    }
}
