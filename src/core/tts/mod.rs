pub mod azure;
mod base;
pub mod elevenlabs;
pub mod google;

pub use azure::{AZURE_TTS_URL, AzureOutputFormat, AzureTTS, AzureVoice};
pub use base::{
    BoxedSynthesizer, DEFAULT_REQUEST_TIMEOUT_SECS, SpeechSynthesizer, TTSConfig, TTSError,
    TTSResult, TextType,
};
pub use elevenlabs::{ELEVENLABS_TTS_URL, ElevenLabsTTS, ElevenLabsVoice, VoiceSettings};
pub use google::{GOOGLE_TTS_URL, GoogleAudioEncoding, GoogleLanguage, GoogleTTS, GoogleVoice};
use std::collections::HashMap;

/// Factory function to create a TTS provider.
///
/// # Supported Providers
///
/// - `"google"` - Google Cloud Text-to-Speech API
/// - `"elevenlabs"` - ElevenLabs TTS API (voice cloning)
/// - `"azure"` or `"microsoft-azure"` - Microsoft Azure Speech Services
///
/// # Example
///
/// ```rust,ignore
/// use voxbench::core::tts::{create_tts_provider, TTSConfig};
///
/// let config = TTSConfig {
///     api_key: "your-api-key".to_string(),
///     voice_id: Some("en-US-JennyNeural".to_string()),
///     ..Default::default()
/// };
///
/// let provider = create_tts_provider("azure", config)?;
/// ```
pub fn create_tts_provider(provider_type: &str, config: TTSConfig) -> TTSResult<BoxedSynthesizer> {
    match provider_type.to_lowercase().as_str() {
        "google" | "google-cloud" | "google_cloud" | "gcp" => Ok(Box::new(GoogleTTS::new(config)?)),
        "elevenlabs" | "eleven-labs" | "eleven_labs" | "11labs" => {
            Ok(Box::new(ElevenLabsTTS::new(config)?))
        }
        "azure" | "microsoft-azure" | "microsoft_azure" => Ok(Box::new(AzureTTS::new(config)?)),
        _ => Err(TTSError::InvalidConfiguration(format!(
            "Unsupported TTS provider: {provider_type}. Supported providers: google, elevenlabs, azure"
        ))),
    }
}

/// Returns a map of provider names to their default API endpoint URLs.
///
/// Note: Azure uses regional endpoints. The URL returned here is a
/// template; the region placeholder is filled at provider construction.
pub fn tts_provider_urls() -> HashMap<String, String> {
    let mut urls = HashMap::new();
    urls.insert("google".to_string(), GOOGLE_TTS_URL.to_string());
    urls.insert("elevenlabs".to_string(), ELEVENLABS_TTS_URL.to_string());
    urls.insert("azure".to_string(), AZURE_TTS_URL.to_string());
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TTSConfig {
        TTSConfig {
            api_key: "test_key".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_google_provider() {
        let provider = create_tts_provider("google", test_config()).unwrap();
        assert_eq!(provider.name(), "google");
    }

    #[test]
    fn test_create_elevenlabs_provider() {
        let config = TTSConfig {
            voice_id: Some("Rachel".to_string()),
            ..test_config()
        };
        let provider = create_tts_provider("elevenlabs", config).unwrap();
        assert_eq!(provider.name(), "elevenlabs");
    }

    #[test]
    fn test_create_azure_provider() {
        let config = TTSConfig {
            voice_id: Some("en-US-JennyNeural".to_string()),
            ..test_config()
        };
        let provider = create_tts_provider("azure", config).unwrap();
        assert_eq!(provider.name(), "azure");
        assert_eq!(provider.max_chars_per_request(), Some(azure::MAX_TEXT_LENGTH));
    }

    #[test]
    fn test_create_provider_aliases() {
        assert!(create_tts_provider("google-cloud", test_config()).is_ok());
        assert!(create_tts_provider("eleven-labs", test_config()).is_ok());
        assert!(create_tts_provider("microsoft-azure", test_config()).is_ok());
    }

    #[test]
    fn test_create_provider_case_insensitive() {
        assert!(create_tts_provider("GOOGLE", test_config()).is_ok());
        assert!(create_tts_provider("ElevenLabs", test_config()).is_ok());
        assert!(create_tts_provider("Azure", test_config()).is_ok());
    }

    #[test]
    fn test_create_provider_invalid() {
        let result = create_tts_provider("invalid_provider", test_config());
        match result {
            Err(TTSError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("google"));
                assert!(msg.contains("elevenlabs"));
                assert!(msg.contains("azure"));
            }
            Err(other) => panic!("Expected InvalidConfiguration error, got: {other:?}"),
            Ok(_) => panic!("Expected error for invalid provider"),
        }
    }

    #[test]
    fn test_provider_urls() {
        let urls = tts_provider_urls();
        assert_eq!(urls.len(), 3);
        assert_eq!(urls.get("google").unwrap(), GOOGLE_TTS_URL);
        assert_eq!(urls.get("elevenlabs").unwrap(), ELEVENLABS_TTS_URL);
        assert_eq!(urls.get("azure").unwrap(), AZURE_TTS_URL);
    }
}
