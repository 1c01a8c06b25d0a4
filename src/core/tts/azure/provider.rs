//! Azure Speech Services TTS provider implementation.
//!
//! This module provides the Azure provider that implements the
//! [`SpeechSynthesizer`] trait using the Speech Services REST API.
//!
//! # API Reference
//!
//! - Endpoint: `POST https://{region}.tts.speech.microsoft.com/cognitiveservices/v1`
//! - Auth: `Ocp-Apim-Subscription-Key` header (key is region-bound)
//! - Request: SSML document (`application/ssml+xml`)
//! - Output format: `X-Microsoft-OutputFormat` header
//! - Response: raw audio bytes
//!
//! The endpoint rejects oversized requests, so the provider advertises a
//! per-request character budget via `max_chars_per_request`.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;

use super::config::{AzureOutputFormat, AzureTTSConfig, AzureVoice, MAX_TEXT_LENGTH};
use crate::core::tts::base::{
    SpeechSynthesizer, TTSConfig, TTSError, TTSResult, TextType, build_http_client, response_bytes,
};

/// Azure TTS URL template; the region is substituted at construction.
pub const AZURE_TTS_URL: &str = "https://{region}.tts.speech.microsoft.com/cognitiveservices/v1";

/// Escape text for embedding in an SSML document.
fn escape_ssml_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Azure Speech Services TTS provider.
///
/// # Example
///
/// ```rust,ignore
/// use voxbench::core::tts::{SpeechSynthesizer, TTSConfig, AzureTTS};
///
/// #[tokio::main]
/// async fn main() {
///     let config = TTSConfig {
///         api_key: "subscription-key".to_string(),
///         region: Some("westus2".to_string()),
///         voice_id: Some("en-US-JennyNeural".to_string()),
///         ..Default::default()
///     };
///
///     let tts = AzureTTS::new(config).unwrap();
///     let audio = tts.synthesize("Hello, how are you today?").await.unwrap();
///     std::fs::write("output.mp3", &audio).unwrap();
/// }
/// ```
pub struct AzureTTS {
    config: AzureTTSConfig,
    client: reqwest::Client,
    endpoint: String,
}

impl AzureTTS {
    /// Create a new Azure TTS instance.
    pub fn new(config: TTSConfig) -> TTSResult<Self> {
        if config.api_key.is_empty() {
            return Err(TTSError::InvalidConfiguration(
                "Azure Speech subscription key is required".to_string(),
            ));
        }

        let parsed = AzureTTSConfig::from_base(config);
        let endpoint = parsed
            .base
            .endpoint
            .clone()
            .unwrap_or_else(|| AZURE_TTS_URL.replace("{region}", &parsed.region));
        let client = build_http_client(&parsed.base)?;

        Ok(Self {
            config: parsed,
            client,
            endpoint,
        })
    }

    /// Get the configured voice.
    pub fn voice(&self) -> &AzureVoice {
        &self.config.voice
    }

    /// Get the configured output format.
    pub fn output_format(&self) -> AzureOutputFormat {
        self.config.output_format
    }

    /// Get the configured region.
    pub fn region(&self) -> &str {
        &self.config.region
    }

    /// Build the SSML document for `text`.
    ///
    /// Plain text is escaped and wrapped in a voice element; raw SSML
    /// input is passed through untouched.
    fn build_ssml(&self, text: &str) -> String {
        match self.config.text_type {
            TextType::Ssml => text.to_string(),
            TextType::Text => format!(
                "<speak version='1.0' xml:lang='{}'><voice name='{}'>{}</voice></speak>",
                self.config.effective_language_code(),
                self.config.voice.as_str(),
                escape_ssml_text(text)
            ),
        }
    }

    /// Build the synthesis HTTP request for `text`.
    fn build_request(&self, text: &str) -> reqwest::RequestBuilder {
        self.client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.config.base.api_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", self.config.output_format.as_str())
            .header("User-Agent", concat!("voxbench/", env!("CARGO_PKG_VERSION")))
            .body(self.build_ssml(text))
    }
}

#[async_trait]
impl SpeechSynthesizer for AzureTTS {
    fn name(&self) -> &'static str {
        "azure"
    }

    fn max_chars_per_request(&self) -> Option<usize> {
        Some(MAX_TEXT_LENGTH)
    }

    async fn synthesize(&self, text: &str) -> TTSResult<Bytes> {
        tracing::debug!(
            voice = %self.config.voice,
            region = %self.config.region,
            chars = text.chars().count(),
            "Submitting Azure synthesis request"
        );

        let response = self.build_request(text).send().await?;
        response_bytes(response).await
    }

    fn provider_info(&self) -> serde_json::Value {
        json!({
            "provider": "azure",
            "api_type": "HTTP REST",
            "endpoint": AZURE_TTS_URL,
            "max_text_length": MAX_TEXT_LENGTH,
            "default_region": super::config::DEFAULT_REGION,
            "voices": AzureVoice::catalog()
                .iter()
                .map(|v| v.as_str().to_string())
                .collect::<Vec<_>>(),
            "documentation": "https://learn.microsoft.com/azure/ai-services/speech-service/rest-text-to-speech",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_requires_subscription_key() {
        let result = AzureTTS::new(TTSConfig::default());
        assert!(matches!(result, Err(TTSError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_region_in_endpoint() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            region: Some("westus2".to_string()),
            ..Default::default()
        };
        let tts = AzureTTS::new(config).unwrap();
        assert_eq!(tts.region(), "westus2");
        let built = tts.build_request("hi").build().unwrap();
        assert_eq!(
            built.url().as_str(),
            "https://westus2.tts.speech.microsoft.com/cognitiveservices/v1"
        );
    }

    #[test]
    fn test_default_region() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            ..Default::default()
        };
        let tts = AzureTTS::new(config).unwrap();
        assert_eq!(tts.region(), "eastus");
    }

    #[test]
    fn test_ssml_wrapping_and_escaping() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            voice_id: Some("swara".to_string()),
            ..Default::default()
        };
        let tts = AzureTTS::new(config).unwrap();
        let ssml = tts.build_ssml("Tom & Jerry <3");
        assert_eq!(
            ssml,
            "<speak version='1.0' xml:lang='hi-IN'>\
             <voice name='hi-IN-SwaraNeural'>Tom &amp; Jerry &lt;3</voice></speak>"
        );
    }

    #[test]
    fn test_raw_ssml_passthrough() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            text_type: TextType::Ssml,
            ..Default::default()
        };
        let tts = AzureTTS::new(config).unwrap();
        let doc = "<speak version='1.0'><voice name='x'>hi</voice></speak>";
        assert_eq!(tts.build_ssml(doc), doc);
    }

    #[test]
    fn test_request_headers() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            audio_format: Some("wav".to_string()),
            ..Default::default()
        };
        let tts = AzureTTS::new(config).unwrap();
        let built = tts.build_request("hi").build().unwrap();
        let headers = built.headers();
        assert_eq!(headers.get("Ocp-Apim-Subscription-Key").unwrap(), "test_key");
        assert_eq!(headers.get("Content-Type").unwrap(), "application/ssml+xml");
        assert_eq!(
            headers.get("X-Microsoft-OutputFormat").unwrap(),
            "riff-16khz-16bit-mono-pcm"
        );
    }

    #[test]
    fn test_max_chars_advertised() {
        let config = TTSConfig {
            api_key: "test_key".to_string(),
            ..Default::default()
        };
        let tts = AzureTTS::new(config).unwrap();
        assert_eq!(tts.max_chars_per_request(), Some(MAX_TEXT_LENGTH));
    }

    #[test]
    fn test_escape_ssml_text() {
        assert_eq!(escape_ssml_text("a&b"), "a&amp;b");
        assert_eq!(escape_ssml_text("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_ssml_text("it's \"ok\""), "it&apos;s &quot;ok&quot;");
        assert_eq!(escape_ssml_text("plain"), "plain");
    }
}
