//! Google Cloud Text-to-Speech provider implementation.
//!
//! This module provides the Google provider that implements the
//! [`SpeechSynthesizer`] trait using the Cloud TTS REST API.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://texttospeech.googleapis.com/v1/text:synthesize`
//! - Auth: API key passed as the `key` query parameter
//! - Request: JSON with `input`, `voice`, and `audioConfig` objects
//! - Response: JSON carrying base64-encoded `audioContent`

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use serde::Deserialize;
use serde_json::json;

use super::config::{GoogleAudioEncoding, GoogleLanguage, GoogleTTSConfig, GoogleVoice};
use crate::core::tts::base::{
    SpeechSynthesizer, TTSConfig, TTSError, TTSResult, build_http_client,
};

/// Google Cloud TTS API endpoint
pub const GOOGLE_TTS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// Successful synthesis response body.
#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: String,
}

/// Google Cloud TTS provider.
///
/// # Example
///
/// ```rust,ignore
/// use voxbench::core::tts::{SpeechSynthesizer, TTSConfig, GoogleTTS};
///
/// #[tokio::main]
/// async fn main() {
///     let config = TTSConfig {
///         api_key: "AIza...".to_string(),
///         language_code: Some("hi-IN".to_string()),
///         ..Default::default()
///     };
///
///     let tts = GoogleTTS::new(config).unwrap();
///     let audio = tts.synthesize("नमस्ते, आज आप कैसे हैं?").await.unwrap();
///     std::fs::write("output.mp3", &audio).unwrap();
/// }
/// ```
pub struct GoogleTTS {
    config: GoogleTTSConfig,
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTTS {
    /// Create a new Google TTS instance.
    pub fn new(config: TTSConfig) -> TTSResult<Self> {
        if config.api_key.is_empty() {
            return Err(TTSError::InvalidConfiguration(
                "Google API key is required".to_string(),
            ));
        }

        let endpoint = config
            .endpoint
            .clone()
            .unwrap_or_else(|| GOOGLE_TTS_URL.to_string());
        let client = build_http_client(&config)?;

        Ok(Self {
            config: GoogleTTSConfig::from_base(config),
            client,
            endpoint,
        })
    }

    /// Get the configured voice.
    pub fn voice(&self) -> &GoogleVoice {
        &self.config.voice
    }

    /// Get the configured language.
    pub fn language(&self) -> GoogleLanguage {
        self.config.language
    }

    /// Get the configured output encoding.
    pub fn encoding(&self) -> GoogleAudioEncoding {
        self.config.encoding
    }

    /// Build the synthesis HTTP request for `text`.
    fn build_request(&self, text: &str) -> reqwest::RequestBuilder {
        let body = json!({
            "input": { "text": text },
            "voice": {
                "languageCode": self.config.language.as_str(),
                "name": self.config.voice.as_str(),
            },
            "audioConfig": {
                "audioEncoding": self.config.encoding.as_str(),
            },
        });

        self.client
            .post(&self.endpoint)
            .query(&[("key", self.config.base.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&body)
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTTS {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn synthesize(&self, text: &str) -> TTSResult<Bytes> {
        tracing::debug!(
            voice = %self.config.voice,
            language = %self.config.language,
            chars = text.chars().count(),
            "Submitting Google synthesis request"
        );

        let response = self.build_request(text).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TTSError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| TTSError::Decode(e.to_string()))?;
        let audio = BASE64
            .decode(parsed.audio_content)
            .map_err(|e| TTSError::Decode(format!("invalid base64 audioContent: {e}")))?;

        Ok(Bytes::from(audio))
    }

    fn provider_info(&self) -> serde_json::Value {
        json!({
            "provider": "google",
            "api_type": "HTTP REST",
            "endpoint": GOOGLE_TTS_URL,
            "supported_languages": GoogleLanguage::all()
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>(),
            "supported_encodings": ["MP3", "LINEAR16", "OGG_OPUS"],
            "documentation": "https://cloud.google.com/text-to-speech/docs/reference/rest/v1/text/synthesize",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_requires_api_key() {
        let result = GoogleTTS::new(TTSConfig::default());
        assert!(matches!(result, Err(TTSError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_creation_with_defaults() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            ..Default::default()
        };
        let tts = GoogleTTS::new(config).unwrap();
        assert_eq!(tts.voice(), &GoogleVoice::EnUsWavenetD);
        assert_eq!(tts.language(), GoogleLanguage::EnUs);
        assert_eq!(tts.encoding(), GoogleAudioEncoding::Mp3);
    }

    #[test]
    fn test_request_building() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            voice_id: Some("hi-IN-Standard-B".to_string()),
            ..Default::default()
        };
        let tts = GoogleTTS::new(config).unwrap();

        let built = tts.build_request("Hello world").build().unwrap();
        assert_eq!(
            built.url().as_str(),
            format!("{GOOGLE_TTS_URL}?key=test_key")
        );
        assert_eq!(built.method(), "POST");

        let body = built.body().unwrap().as_bytes().unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(parsed["input"]["text"], "Hello world");
        assert_eq!(parsed["voice"]["languageCode"], "hi-IN");
        assert_eq!(parsed["voice"]["name"], "hi-IN-Standard-B");
        assert_eq!(parsed["audioConfig"]["audioEncoding"], "MP3");
    }

    #[test]
    fn test_endpoint_override() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            endpoint: Some("http://127.0.0.1:9999/v1/text:synthesize".to_string()),
            ..Default::default()
        };
        let tts = GoogleTTS::new(config).unwrap();
        let built = tts.build_request("hi").build().unwrap();
        assert!(
            built
                .url()
                .as_str()
                .starts_with("http://127.0.0.1:9999/v1/text:synthesize")
        );
    }

    #[test]
    fn test_provider_info() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            ..Default::default()
        };
        let tts = GoogleTTS::new(config).unwrap();
        let info = tts.provider_info();
        assert_eq!(info["provider"], "google");
        assert!(
            info["supported_languages"]
                .as_array()
                .unwrap()
                .contains(&json!("hi-IN"))
        );
    }
}
