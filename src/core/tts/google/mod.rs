mod config;
mod provider;

pub use config::{GoogleAudioEncoding, GoogleLanguage, GoogleTTSConfig, GoogleVoice};
pub use provider::{GOOGLE_TTS_URL, GoogleTTS};
