//! ElevenLabs TTS provider implementation.
//!
//! This module provides the ElevenLabs provider that implements the
//! [`SpeechSynthesizer`] trait using the text-to-speech REST API.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://api.elevenlabs.io/v1/text-to-speech/{voice_id}`
//! - Auth: `xi-api-key` header
//! - Request: JSON with `text`, `model_id`, and `voice_settings`
//! - Response: raw `audio/mpeg` bytes

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;

use super::config::{ElevenLabsTTSConfig, ElevenLabsVoice, VoiceSettings};
use crate::core::tts::base::{
    SpeechSynthesizer, TTSConfig, TTSError, TTSResult, build_http_client, response_bytes,
};

/// ElevenLabs TTS API base URL (voice ID is appended to the path)
pub const ELEVENLABS_TTS_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

/// ElevenLabs TTS provider.
///
/// # Example
///
/// ```rust,ignore
/// use voxbench::core::tts::{SpeechSynthesizer, TTSConfig, ElevenLabsTTS};
///
/// #[tokio::main]
/// async fn main() {
///     let config = TTSConfig {
///         api_key: "sk_...".to_string(),
///         voice_id: Some("Rachel".to_string()),
///         ..Default::default()
///     };
///
///     let tts = ElevenLabsTTS::new(config).unwrap();
///     let audio = tts.synthesize("Hello, how are you today?").await.unwrap();
///     std::fs::write("output.mp3", &audio).unwrap();
/// }
/// ```
pub struct ElevenLabsTTS {
    config: ElevenLabsTTSConfig,
    client: reqwest::Client,
    endpoint: String,
}

impl ElevenLabsTTS {
    /// Create a new ElevenLabs TTS instance.
    pub fn new(config: TTSConfig) -> TTSResult<Self> {
        if config.api_key.is_empty() {
            return Err(TTSError::InvalidConfiguration(
                "ElevenLabs API key is required".to_string(),
            ));
        }

        let endpoint = config
            .endpoint
            .clone()
            .unwrap_or_else(|| ELEVENLABS_TTS_URL.to_string());
        let client = build_http_client(&config)?;

        Ok(Self {
            config: ElevenLabsTTSConfig::from_base(config),
            client,
            endpoint,
        })
    }

    /// Get the configured voice.
    pub fn voice(&self) -> &ElevenLabsVoice {
        &self.config.voice
    }

    /// Get the configured model ID.
    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    /// Get the configured voice settings.
    pub fn voice_settings(&self) -> VoiceSettings {
        self.config.voice_settings
    }

    /// Build the synthesis HTTP request for `text`.
    fn build_request(&self, text: &str) -> reqwest::RequestBuilder {
        let settings = self.config.voice_settings.clamped();
        let body = json!({
            "text": text,
            "model_id": self.config.model_id,
            "voice_settings": {
                "stability": settings.stability,
                "similarity_boost": settings.similarity_boost,
            },
        });

        let url = format!("{}/{}", self.endpoint, self.config.voice.voice_id());
        self.client
            .post(url)
            .header("xi-api-key", &self.config.base.api_key)
            .header("Content-Type", "application/json")
            .header("accept", "audio/mpeg")
            .json(&body)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsTTS {
    fn name(&self) -> &'static str {
        "elevenlabs"
    }

    async fn synthesize(&self, text: &str) -> TTSResult<Bytes> {
        tracing::debug!(
            voice = %self.config.voice,
            model = %self.config.model_id,
            chars = text.chars().count(),
            "Submitting ElevenLabs synthesis request"
        );

        let response = self.build_request(text).send().await?;
        response_bytes(response).await
    }

    fn provider_info(&self) -> serde_json::Value {
        json!({
            "provider": "elevenlabs",
            "api_type": "HTTP REST",
            "endpoint": ELEVENLABS_TTS_URL,
            "default_model": super::config::DEFAULT_MODEL_ID,
            "premade_voices": ElevenLabsVoice::premade()
                .iter()
                .map(|v| v.as_str().to_string())
                .collect::<Vec<_>>(),
            "documentation": "https://elevenlabs.io/docs/api-reference/text-to-speech",
        })
    }
}
