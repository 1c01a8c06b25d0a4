//! Configuration types for Google Cloud Text-to-Speech.
//!
//! Defines the language and voice tables offered for synthesis, plus the
//! audio encodings the `text:synthesize` endpoint accepts. The voice list
//! is a curated subset (one WaveNet and one Standard voice per language);
//! anything else is passed through as a custom voice name.

use serde::{Deserialize, Serialize};

use crate::core::tts::base::TTSConfig;

// =============================================================================
// Language
// =============================================================================

/// Languages offered for Google synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoogleLanguage {
    /// Hindi (India)
    #[serde(rename = "hi-IN")]
    HiIn,
    /// English (US)
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// Spanish (Spain)
    #[serde(rename = "es-ES")]
    EsEs,
    /// French (France)
    #[serde(rename = "fr-FR")]
    FrFr,
}

impl GoogleLanguage {
    /// BCP-47 language code as sent to the API.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HiIn => "hi-IN",
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
            Self::FrFr => "fr-FR",
        }
    }

    /// Human-readable label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HiIn => "Hindi (India)",
            Self::EnUs => "English (US)",
            Self::EsEs => "Spanish (Spain)",
            Self::FrFr => "French (France)",
        }
    }

    /// Parse from string, with fallback to English (US).
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hi-in" | "hi_in" | "hi" => Self::HiIn,
            "en-us" | "en_us" | "en" => Self::EnUs,
            "es-es" | "es_es" | "es" => Self::EsEs,
            "fr-fr" | "fr_fr" | "fr" => Self::FrFr,
            _ => Self::default(),
        }
    }

    /// All supported languages.
    pub fn all() -> [GoogleLanguage; 4] {
        [Self::HiIn, Self::EnUs, Self::EsEs, Self::FrFr]
    }
}

impl std::fmt::Display for GoogleLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Voice
// =============================================================================

/// Google Cloud TTS voices offered per language.
///
/// WaveNet voices are the higher-quality neural option; Standard voices
/// are the cheaper baseline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoogleVoice {
    /// hi-IN-Wavenet-D - Hindi, WaveNet
    HiInWavenetD,
    /// hi-IN-Standard-B - Hindi, Standard
    HiInStandardB,
    /// en-US-Wavenet-D - US English, WaveNet
    #[default]
    EnUsWavenetD,
    /// en-US-Standard-B - US English, Standard
    EnUsStandardB,
    /// es-ES-Wavenet-D - Spanish, WaveNet
    EsEsWavenetD,
    /// es-ES-Standard-B - Spanish, Standard
    EsEsStandardB,
    /// fr-FR-Wavenet-D - French, WaveNet
    FrFrWavenetD,
    /// fr-FR-Standard-B - French, Standard
    FrFrStandardB,
    /// Custom voice name (for voices not in this enum)
    #[serde(rename = "custom")]
    Custom(String),
}

impl GoogleVoice {
    /// Voice name as sent to the API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::HiInWavenetD => "hi-IN-Wavenet-D",
            Self::HiInStandardB => "hi-IN-Standard-B",
            Self::EnUsWavenetD => "en-US-Wavenet-D",
            Self::EnUsStandardB => "en-US-Standard-B",
            Self::EsEsWavenetD => "es-ES-Wavenet-D",
            Self::EsEsStandardB => "es-ES-Standard-B",
            Self::FrFrWavenetD => "fr-FR-Wavenet-D",
            Self::FrFrStandardB => "fr-FR-Standard-B",
            Self::Custom(name) => name,
        }
    }

    /// The language this voice belongs to.
    pub fn language(&self) -> GoogleLanguage {
        match self {
            Self::HiInWavenetD | Self::HiInStandardB => GoogleLanguage::HiIn,
            Self::EnUsWavenetD | Self::EnUsStandardB => GoogleLanguage::EnUs,
            Self::EsEsWavenetD | Self::EsEsStandardB => GoogleLanguage::EsEs,
            Self::FrFrWavenetD | Self::FrFrStandardB => GoogleLanguage::FrFr,
            // Google voice names are language-prefixed; best effort parse,
            // falling back to the default language.
            Self::Custom(name) => {
                let prefix: String = name.chars().take(5).collect();
                GoogleLanguage::from_str_or_default(&prefix)
            }
        }
    }

    /// Parse from string, preserving unrecognized names as custom voices
    /// (Google voice names are case-sensitive).
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hi-in-wavenet-d" => Self::HiInWavenetD,
            "hi-in-standard-b" => Self::HiInStandardB,
            "en-us-wavenet-d" => Self::EnUsWavenetD,
            "en-us-standard-b" => Self::EnUsStandardB,
            "es-es-wavenet-d" => Self::EsEsWavenetD,
            "es-es-standard-b" => Self::EsEsStandardB,
            "fr-fr-wavenet-d" => Self::FrFrWavenetD,
            "fr-fr-standard-b" => Self::FrFrStandardB,
            _ => Self::Custom(s.to_string()),
        }
    }

    /// Default voice for a language (the WaveNet variant).
    pub fn default_for_language(language: GoogleLanguage) -> Self {
        match language {
            GoogleLanguage::HiIn => Self::HiInWavenetD,
            GoogleLanguage::EnUs => Self::EnUsWavenetD,
            GoogleLanguage::EsEs => Self::EsEsWavenetD,
            GoogleLanguage::FrFr => Self::FrFrWavenetD,
        }
    }

    /// Voices offered for a language.
    pub fn voices_for_language(language: GoogleLanguage) -> Vec<GoogleVoice> {
        match language {
            GoogleLanguage::HiIn => vec![Self::HiInWavenetD, Self::HiInStandardB],
            GoogleLanguage::EnUs => vec![Self::EnUsWavenetD, Self::EnUsStandardB],
            GoogleLanguage::EsEs => vec![Self::EsEsWavenetD, Self::EsEsStandardB],
            GoogleLanguage::FrFr => vec![Self::FrFrWavenetD, Self::FrFrStandardB],
        }
    }
}

impl std::fmt::Display for GoogleVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Audio Encoding
// =============================================================================

/// Audio encodings accepted by the `text:synthesize` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoogleAudioEncoding {
    /// MP3 (default)
    #[default]
    #[serde(rename = "MP3")]
    Mp3,
    /// Uncompressed 16-bit signed little-endian (WAV)
    #[serde(rename = "LINEAR16")]
    Linear16,
    /// Ogg Opus
    #[serde(rename = "OGG_OPUS")]
    OggOpus,
}

impl GoogleAudioEncoding {
    /// API enum string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "MP3",
            Self::Linear16 => "LINEAR16",
            Self::OggOpus => "OGG_OPUS",
        }
    }

    /// File extension for saved output.
    #[inline]
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Linear16 => "wav",
            Self::OggOpus => "ogg",
        }
    }

    /// Parse from string, with fallback to MP3.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mp3" | "mpeg" => Self::Mp3,
            "linear16" | "wav" | "pcm" => Self::Linear16,
            "ogg_opus" | "ogg" | "opus" => Self::OggOpus,
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for GoogleAudioEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Configuration for Google Cloud TTS, parsed from a base [`TTSConfig`].
#[derive(Debug, Clone)]
pub struct GoogleTTSConfig {
    /// Base TTS configuration
    pub base: TTSConfig,
    /// Voice to use for synthesis
    pub voice: GoogleVoice,
    /// Language code sent alongside the voice
    pub language: GoogleLanguage,
    /// Audio output encoding
    pub encoding: GoogleAudioEncoding,
}

impl GoogleTTSConfig {
    /// Resolve voice, language, and encoding from the base config.
    ///
    /// An explicit `language_code` wins over the voice's own language, so
    /// callers can select a language and let the default voice follow.
    pub fn from_base(base: TTSConfig) -> Self {
        let (voice, language) = match (&base.voice_id, &base.language_code) {
            (Some(voice_id), Some(lang)) => (
                GoogleVoice::from_str_or_default(voice_id),
                GoogleLanguage::from_str_or_default(lang),
            ),
            (Some(voice_id), None) => {
                let voice = GoogleVoice::from_str_or_default(voice_id);
                let language = voice.language();
                (voice, language)
            }
            (None, Some(lang)) => {
                let language = GoogleLanguage::from_str_or_default(lang);
                (GoogleVoice::default_for_language(language), language)
            }
            (None, None) => (GoogleVoice::default(), GoogleLanguage::default()),
        };

        let encoding = base
            .audio_format
            .as_deref()
            .map(GoogleAudioEncoding::from_str_or_default)
            .unwrap_or_default();

        Self {
            base,
            voice,
            language,
            encoding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!(GoogleLanguage::from_str_or_default("hi-IN"), GoogleLanguage::HiIn);
        assert_eq!(GoogleLanguage::from_str_or_default("fr"), GoogleLanguage::FrFr);
        assert_eq!(GoogleLanguage::from_str_or_default("xx-YY"), GoogleLanguage::EnUs);
        assert_eq!(GoogleLanguage::HiIn.as_str(), "hi-IN");
        assert_eq!(GoogleLanguage::HiIn.label(), "Hindi (India)");
    }

    #[test]
    fn test_voice_parsing() {
        assert_eq!(
            GoogleVoice::from_str_or_default("hi-IN-Wavenet-D"),
            GoogleVoice::HiInWavenetD
        );
        let custom = GoogleVoice::from_str_or_default("de-DE-Neural2-C");
        assert!(matches!(custom, GoogleVoice::Custom(_)));
        assert_eq!(custom.as_str(), "de-DE-Neural2-C");
    }

    #[test]
    fn test_voice_language() {
        assert_eq!(GoogleVoice::EsEsStandardB.language(), GoogleLanguage::EsEs);
        assert_eq!(
            GoogleVoice::Custom("fr-FR-Neural2-A".to_string()).language(),
            GoogleLanguage::FrFr
        );
    }

    #[test]
    fn test_voices_for_language() {
        let voices = GoogleVoice::voices_for_language(GoogleLanguage::HiIn);
        assert_eq!(
            voices,
            vec![GoogleVoice::HiInWavenetD, GoogleVoice::HiInStandardB]
        );
    }

    #[test]
    fn test_encoding() {
        assert_eq!(GoogleAudioEncoding::Mp3.as_str(), "MP3");
        assert_eq!(GoogleAudioEncoding::Mp3.file_extension(), "mp3");
        assert_eq!(
            GoogleAudioEncoding::from_str_or_default("wav"),
            GoogleAudioEncoding::Linear16
        );
        assert_eq!(
            GoogleAudioEncoding::from_str_or_default("unknown"),
            GoogleAudioEncoding::Mp3
        );
    }

    #[test]
    fn test_config_language_drives_default_voice() {
        let base = TTSConfig {
            language_code: Some("hi-IN".to_string()),
            ..Default::default()
        };
        let config = GoogleTTSConfig::from_base(base);
        assert_eq!(config.voice, GoogleVoice::HiInWavenetD);
        assert_eq!(config.language, GoogleLanguage::HiIn);
    }

    #[test]
    fn test_config_voice_drives_language() {
        let base = TTSConfig {
            voice_id: Some("fr-FR-Standard-B".to_string()),
            ..Default::default()
        };
        let config = GoogleTTSConfig::from_base(base);
        assert_eq!(config.language, GoogleLanguage::FrFr);
    }
}
