//! Configuration types for the ElevenLabs text-to-speech API.
//!
//! ElevenLabs addresses voices by opaque IDs, so this module carries the
//! friendly-name to voice-ID table for the premade voice set, along with
//! the voice settings object sent with every request.

use serde::{Deserialize, Serialize};

use crate::core::tts::base::TTSConfig;

/// Default ElevenLabs model.
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";

// =============================================================================
// Voice
// =============================================================================

/// Premade ElevenLabs voices.
///
/// The variants map friendly names to the fixed voice IDs of the premade
/// library; cloned or library voices go through `Custom` with their raw ID.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElevenLabsVoice {
    /// Rachel - American, female (default)
    #[default]
    Rachel,
    /// Clyde - American, male
    Clyde,
    /// Domi - American, female
    Domi,
    /// Bella - American, female
    Bella,
    /// Antoni - American, male
    Antoni,
    /// Josh - American, male
    Josh,
    /// Arnold - American, male
    Arnold,
    /// Adam - American, male
    Adam,
    /// Sam - American, male
    Sam,
    /// Glinda - American, female
    Glinda,
    /// Custom voice ID (cloned voices, library voices)
    #[serde(rename = "custom")]
    Custom(String),
}

impl ElevenLabsVoice {
    /// The voice ID used in the request path.
    pub fn voice_id(&self) -> &str {
        match self {
            Self::Rachel => "21m00Tcm4TlvDq8ikWAM",
            Self::Clyde => "2EiwWnXFnvU5JabPnvhX",
            Self::Domi => "AZnzlk1XvdvUeBnZuKmr",
            Self::Bella => "EXAVTjldLCmjljKP351r",
            Self::Antoni => "ErXwobaYiN019PXIpEWx",
            Self::Josh => "TxGEqnHWyiGGUDrREhUu",
            Self::Arnold => "VR6AewLTigWG4xSOukaG",
            Self::Adam => "pNInz6obpgDQGcFmaJgB",
            Self::Sam => "yoZ06aetlK24chk0IIhk",
            Self::Glinda => "z9fAnlkpzvi1yqmWHvjz",
            Self::Custom(id) => id,
        }
    }

    /// Friendly name for listings.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rachel => "Rachel",
            Self::Clyde => "Clyde",
            Self::Domi => "Domi",
            Self::Bella => "Bella",
            Self::Antoni => "Antoni",
            Self::Josh => "Josh",
            Self::Arnold => "Arnold",
            Self::Adam => "Adam",
            Self::Sam => "Sam",
            Self::Glinda => "Glinda",
            Self::Custom(id) => id,
        }
    }

    /// Parse from a friendly name, falling back to a custom voice ID.
    ///
    /// Unrecognized input keeps its original case since voice IDs are
    /// case-sensitive.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "rachel" => Self::Rachel,
            "clyde" => Self::Clyde,
            "domi" => Self::Domi,
            "bella" => Self::Bella,
            "antoni" => Self::Antoni,
            "josh" => Self::Josh,
            "arnold" => Self::Arnold,
            "adam" => Self::Adam,
            "sam" => Self::Sam,
            "glinda" => Self::Glinda,
            _ => Self::Custom(s.to_string()),
        }
    }

    /// All premade voices.
    pub fn premade() -> Vec<ElevenLabsVoice> {
        vec![
            Self::Rachel,
            Self::Clyde,
            Self::Domi,
            Self::Bella,
            Self::Antoni,
            Self::Josh,
            Self::Arnold,
            Self::Adam,
            Self::Sam,
            Self::Glinda,
        ]
    }
}

impl std::fmt::Display for ElevenLabsVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Voice Settings
// =============================================================================

/// Voice rendering settings sent with every synthesis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Voice consistency across renditions (0.0 to 1.0)
    pub stability: f32,
    /// Adherence to the original voice (0.0 to 1.0)
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.5,
        }
    }
}

impl VoiceSettings {
    /// Clamp both settings into the valid 0.0 to 1.0 range.
    pub fn clamped(self) -> Self {
        Self {
            stability: self.stability.clamp(0.0, 1.0),
            similarity_boost: self.similarity_boost.clamp(0.0, 1.0),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Configuration for ElevenLabs TTS, parsed from a base [`TTSConfig`].
#[derive(Debug, Clone)]
pub struct ElevenLabsTTSConfig {
    /// Base TTS configuration
    pub base: TTSConfig,
    /// Voice to use for synthesis
    pub voice: ElevenLabsVoice,
    /// Model identifier
    pub model_id: String,
    /// Voice rendering settings
    pub voice_settings: VoiceSettings,
}

impl ElevenLabsTTSConfig {
    /// Resolve voice and model from the base config.
    pub fn from_base(base: TTSConfig) -> Self {
        let voice = base
            .voice_id
            .as_deref()
            .map(ElevenLabsVoice::from_str_or_default)
            .unwrap_or_default();

        let model_id = if base.model.is_empty() {
            DEFAULT_MODEL_ID.to_string()
        } else {
            base.model.clone()
        };

        Self {
            base,
            voice,
            model_id,
            voice_settings: VoiceSettings::default(),
        }
    }
}
