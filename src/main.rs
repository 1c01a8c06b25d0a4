use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use voxbench::audio;
use voxbench::config::AppConfig;
use voxbench::core::tts::{
    AzureOutputFormat, AzureVoice, ElevenLabsVoice, GoogleAudioEncoding, GoogleLanguage,
    GoogleVoice, SpeechSynthesizer, TTSConfig, create_tts_provider,
};
use voxbench::synthesis::{SynthesisOptions, synthesize_to_files};

/// voxbench - multi-provider text-to-speech from the command line
#[derive(Parser, Debug)]
#[command(name = "voxbench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Synthesize speech from text
    Speak {
        /// Text to synthesize (reads --input or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short = 'i', long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// TTS provider (google, elevenlabs, azure)
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Voice name or provider voice ID
        #[arg(long)]
        voice: Option<String>,

        /// Language code (e.g. "hi-IN")
        #[arg(short = 'l', long)]
        language: Option<String>,

        /// Output file path (defaults into the configured output directory)
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Audio output format (mp3, wav, ogg)
        #[arg(short = 'f', long)]
        format: Option<String>,

        /// Per-request character budget override
        #[arg(long)]
        max_chars: Option<usize>,

        /// Play the audio after synthesis
        #[arg(long)]
        play: bool,
    },

    /// List the voices offered per provider
    Voices {
        /// Restrict the listing to one provider
        #[arg(short = 'p', long)]
        provider: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::from_env()?,
    };

    match cli.command {
        Commands::Speak {
            text,
            input,
            provider,
            voice,
            language,
            output,
            format,
            max_chars,
            play,
        } => {
            let text = resolve_text(text, input)?;
            run_speak(
                &config, &text, provider, voice, language, output, format, max_chars, play,
            )
            .await
        }
        Commands::Voices { provider } => {
            run_voices(provider.as_deref());
            Ok(())
        }
    }
}

/// Resolve the input text from the positional argument, a file, or stdin.
fn resolve_text(text: Option<String>, input: Option<PathBuf>) -> anyhow::Result<String> {
    let text = match (text, input) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    if text.trim().is_empty() {
        bail!("Refusing to synthesize empty input");
    }
    Ok(text)
}

/// Default file extension for the chosen provider and format.
fn output_extension(provider: &str, format: Option<&str>) -> &'static str {
    match provider {
        "google" => format
            .map(GoogleAudioEncoding::from_str_or_default)
            .unwrap_or_default()
            .file_extension(),
        "azure" => format
            .map(AzureOutputFormat::from_str_or_default)
            .unwrap_or_default()
            .file_extension(),
        _ => "mp3",
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_speak(
    config: &AppConfig,
    text: &str,
    provider: Option<String>,
    voice: Option<String>,
    language: Option<String>,
    output: Option<PathBuf>,
    format: Option<String>,
    max_chars: Option<usize>,
    play: bool,
) -> anyhow::Result<()> {
    let provider_name = provider.unwrap_or_else(|| config.default_provider.clone());
    let api_key = config.get_api_key(&provider_name)?;

    let tts_config = TTSConfig {
        provider: provider_name.clone(),
        api_key,
        voice_id: voice,
        language_code: language,
        audio_format: format.clone(),
        region: Some(config.azure_region()),
        ..Default::default()
    };
    let synthesizer = create_tts_provider(&provider_name, tts_config)?;

    let output = output.unwrap_or_else(|| {
        let ext = output_extension(synthesizer.name(), format.as_deref());
        config
            .output_dir
            .join(format!("{}_output_audio.{ext}", synthesizer.name()))
    });
    let options = SynthesisOptions {
        output,
        max_chars: max_chars.or(config.chunk_max_chars),
    };

    let report = synthesize_to_files(synthesizer.as_ref(), text, &options).await?;

    for outcome in &report.outcomes {
        match &outcome.error {
            None => println!(
                "chunk {}/{}: {} ({} bytes, {:.2}s)",
                outcome.index,
                report.outcomes.len(),
                outcome.path.display(),
                outcome.bytes_written,
                outcome.elapsed.as_secs_f64(),
            ),
            Some(err) => println!(
                "chunk {}/{}: FAILED: {err}",
                outcome.index,
                report.outcomes.len(),
            ),
        }
    }

    if report.succeeded() == 0 {
        bail!("All {} chunks failed to synthesize", report.outcomes.len());
    }
    if report.failed() > 0 {
        println!(
            "{} of {} chunks failed; partial audio written",
            report.failed(),
            report.outcomes.len()
        );
    }

    if play {
        let files: Vec<PathBuf> = report
            .written_files()
            .into_iter()
            .map(PathBuf::from)
            .collect();
        tokio::task::spawn_blocking(move || audio::play_files(&files, None))
            .await
            .context("Playback task panicked")??;
    }

    Ok(())
}

fn run_voices(provider: Option<&str>) {
    let wanted = |name: &str| provider.is_none_or(|p| p.eq_ignore_ascii_case(name));

    if wanted("google") {
        println!("Google Cloud Text-to-Speech:");
        for language in GoogleLanguage::all() {
            let voices = GoogleVoice::voices_for_language(language);
            let names: Vec<&str> = voices.iter().map(|v| v.as_str()).collect();
            println!(
                "  {} [{}]: {}",
                language.label(),
                language.as_str(),
                names.join(", ")
            );
        }
    }

    if wanted("elevenlabs") {
        println!("ElevenLabs:");
        for voice in ElevenLabsVoice::premade() {
            println!("  {:<8} {}", voice.as_str(), voice.voice_id());
        }
    }

    if wanted("azure") {
        println!("Azure Speech Services:");
        for voice in AzureVoice::catalog() {
            println!("  {voice}");
        }
    }
}
