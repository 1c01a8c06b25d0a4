//! Configuration types for Azure Speech Services text-to-speech.
//!
//! Azure subscription keys are bound to a region, requests are SSML
//! documents, and the output format is selected by header. The endpoint
//! caps the text accepted per request, so long input must be split before
//! submission (see [`MAX_TEXT_LENGTH`]).

use serde::{Deserialize, Serialize};

use crate::core::tts::base::{TTSConfig, TextType};

/// Maximum text length per synthesis request (characters).
pub const MAX_TEXT_LENGTH: usize = 3000;

/// Default Azure region when none is configured.
pub const DEFAULT_REGION: &str = "eastus";

// =============================================================================
// Output Format
// =============================================================================

/// Audio output formats selected via the `X-Microsoft-OutputFormat` header.
///
/// This is a subset of the formats Azure offers, covering compressed MP3
/// for playback and RIFF PCM for further processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AzureOutputFormat {
    /// 16kHz 128kbit/s mono MP3 (default)
    #[default]
    #[serde(rename = "audio-16khz-128kbitrate-mono-mp3")]
    Audio16Khz128KBitRateMonoMp3,
    /// 24kHz 160kbit/s mono MP3
    #[serde(rename = "audio-24khz-160kbitrate-mono-mp3")]
    Audio24Khz160KBitRateMonoMp3,
    /// RIFF WAV, 16kHz 16-bit mono PCM
    #[serde(rename = "riff-16khz-16bit-mono-pcm")]
    Riff16Khz16BitMonoPcm,
    /// Ogg Opus, 16kHz
    #[serde(rename = "ogg-16khz-16bit-mono-opus")]
    Ogg16Khz16BitMonoOpus,
}

impl AzureOutputFormat {
    /// Header value as sent to the API.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio16Khz128KBitRateMonoMp3 => "audio-16khz-128kbitrate-mono-mp3",
            Self::Audio24Khz160KBitRateMonoMp3 => "audio-24khz-160kbitrate-mono-mp3",
            Self::Riff16Khz16BitMonoPcm => "riff-16khz-16bit-mono-pcm",
            Self::Ogg16Khz16BitMonoOpus => "ogg-16khz-16bit-mono-opus",
        }
    }

    /// File extension for saved output.
    #[inline]
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Audio16Khz128KBitRateMonoMp3 | Self::Audio24Khz160KBitRateMonoMp3 => "mp3",
            Self::Riff16Khz16BitMonoPcm => "wav",
            Self::Ogg16Khz16BitMonoOpus => "ogg",
        }
    }

    /// Parse from string, with fallback to 16kHz MP3.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mp3" | "audio-16khz-128kbitrate-mono-mp3" => Self::Audio16Khz128KBitRateMonoMp3,
            "mp3-24khz" | "audio-24khz-160kbitrate-mono-mp3" => Self::Audio24Khz160KBitRateMonoMp3,
            "wav" | "pcm" | "riff-16khz-16bit-mono-pcm" => Self::Riff16Khz16BitMonoPcm,
            "ogg" | "opus" | "ogg-16khz-16bit-mono-opus" => Self::Ogg16Khz16BitMonoOpus,
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for AzureOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Voice
// =============================================================================

/// Popular Azure neural voices.
///
/// A curated subset covering the languages the other providers offer; the
/// full catalog is available through `Custom` with any Azure voice name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AzureVoice {
    /// en-US-JennyNeural - US English, Female (default)
    #[default]
    JennyNeural,
    /// en-US-GuyNeural - US English, Male
    GuyNeural,
    /// en-US-AriaNeural - US English, Female
    AriaNeural,
    /// hi-IN-SwaraNeural - Hindi, Female
    SwaraNeural,
    /// hi-IN-MadhurNeural - Hindi, Male
    MadhurNeural,
    /// es-ES-ElviraNeural - Spanish, Female
    ElviraNeural,
    /// es-ES-AlvaroNeural - Spanish, Male
    AlvaroNeural,
    /// fr-FR-DeniseNeural - French, Female
    DeniseNeural,
    /// fr-FR-HenriNeural - French, Male
    HenriNeural,
    /// Custom voice name (for voices not in this enum)
    #[serde(rename = "custom")]
    Custom(String),
}

impl AzureVoice {
    /// Full voice name as used in SSML.
    pub fn as_str(&self) -> &str {
        match self {
            Self::JennyNeural => "en-US-JennyNeural",
            Self::GuyNeural => "en-US-GuyNeural",
            Self::AriaNeural => "en-US-AriaNeural",
            Self::SwaraNeural => "hi-IN-SwaraNeural",
            Self::MadhurNeural => "hi-IN-MadhurNeural",
            Self::ElviraNeural => "es-ES-ElviraNeural",
            Self::AlvaroNeural => "es-ES-AlvaroNeural",
            Self::DeniseNeural => "fr-FR-DeniseNeural",
            Self::HenriNeural => "fr-FR-HenriNeural",
            Self::Custom(name) => name,
        }
    }

    /// The voice's language code for the SSML `xml:lang` attribute.
    pub fn language_code(&self) -> &str {
        match self {
            Self::JennyNeural | Self::GuyNeural | Self::AriaNeural => "en-US",
            Self::SwaraNeural | Self::MadhurNeural => "hi-IN",
            Self::ElviraNeural | Self::AlvaroNeural => "es-ES",
            Self::DeniseNeural | Self::HenriNeural => "fr-FR",
            // Azure voice names are language-prefixed ("xx-YY-Name").
            Self::Custom(name) => {
                let mut parts = name.splitn(3, '-');
                let lang_len = match (parts.next(), parts.next()) {
                    (Some(l), Some(r)) => l.len() + 1 + r.len(),
                    _ => 0,
                };
                if lang_len > 0 && name.len() > lang_len {
                    &name[..lang_len]
                } else {
                    "en-US"
                }
            }
        }
    }

    /// Parse from string, accepting full names or bare voice names, and
    /// preserving unrecognized input as a custom voice.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "en-us-jennyneural" | "jenny" | "jennyneural" => Self::JennyNeural,
            "en-us-guyneural" | "guy" | "guyneural" => Self::GuyNeural,
            "en-us-arianeural" | "aria" | "arianeural" => Self::AriaNeural,
            "hi-in-swaraneural" | "swara" | "swaraneural" => Self::SwaraNeural,
            "hi-in-madhurneural" | "madhur" | "madhurneural" => Self::MadhurNeural,
            "es-es-elviraneural" | "elvira" | "elviraneural" => Self::ElviraNeural,
            "es-es-alvaroneural" | "alvaro" | "alvaroneural" => Self::AlvaroNeural,
            "fr-fr-deniseneural" | "denise" | "deniseneural" => Self::DeniseNeural,
            "fr-fr-henrineural" | "henri" | "henrineural" => Self::HenriNeural,
            _ => Self::Custom(s.to_string()),
        }
    }

    /// All curated voices.
    pub fn catalog() -> Vec<AzureVoice> {
        vec![
            Self::JennyNeural,
            Self::GuyNeural,
            Self::AriaNeural,
            Self::SwaraNeural,
            Self::MadhurNeural,
            Self::ElviraNeural,
            Self::AlvaroNeural,
            Self::DeniseNeural,
            Self::HenriNeural,
        ]
    }
}

impl std::fmt::Display for AzureVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Configuration for Azure TTS, parsed from a base [`TTSConfig`].
#[derive(Debug, Clone)]
pub struct AzureTTSConfig {
    /// Base TTS configuration
    pub base: TTSConfig,
    /// Voice to use for synthesis
    pub voice: AzureVoice,
    /// Audio output format
    pub output_format: AzureOutputFormat,
    /// Azure region the subscription key is bound to
    pub region: String,
    /// Whether submitted text is plain text or raw SSML
    pub text_type: TextType,
}

impl AzureTTSConfig {
    /// Resolve voice, format, and region from the base config.
    pub fn from_base(base: TTSConfig) -> Self {
        let voice = base
            .voice_id
            .as_deref()
            .map(AzureVoice::from_str_or_default)
            .unwrap_or_default();

        let output_format = base
            .audio_format
            .as_deref()
            .map(AzureOutputFormat::from_str_or_default)
            .unwrap_or_default();

        let region = base
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let text_type = base.text_type;

        Self {
            base,
            voice,
            output_format,
            region,
            text_type,
        }
    }

    /// The effective language code (explicit override or the voice's own).
    pub fn effective_language_code(&self) -> &str {
        self.base
            .language_code
            .as_deref()
            .unwrap_or_else(|| self.voice.language_code())
    }
}
