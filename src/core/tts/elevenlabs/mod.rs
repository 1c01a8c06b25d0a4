mod config;
mod provider;

pub use config::{DEFAULT_MODEL_ID, ElevenLabsTTSConfig, ElevenLabsVoice, VoiceSettings};
pub use provider::{ELEVENLABS_TTS_URL, ElevenLabsTTS};
