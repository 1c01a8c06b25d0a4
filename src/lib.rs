pub mod audio;
pub mod config;
pub mod core;
pub mod synthesis;

// Re-export commonly used items for convenience
pub use config::{AppConfig, ConfigError};
pub use core::*;
pub use synthesis::{ChunkOutcome, SynthesisOptions, SynthesisReport, synthesize_to_files};
