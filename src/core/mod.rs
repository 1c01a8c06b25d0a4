pub mod chunk;
pub mod tts;

// Re-export commonly used types for convenience
pub use chunk::{ChunkError, chunk_text};
pub use tts::{
    AzureTTS, BoxedSynthesizer, ElevenLabsTTS, GoogleTTS, SpeechSynthesizer, TTSConfig, TTSError,
    TTSResult, TextType, create_tts_provider, tts_provider_urls,
};
