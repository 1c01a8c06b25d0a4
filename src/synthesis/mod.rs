//! Per-chunk synthesis pipeline.
//!
//! Orchestrates one synthesis run: split the input text against the
//! provider's per-request budget, submit the chunks strictly in order,
//! write each chunk's audio to its own output file, and collect a
//! per-chunk outcome. A failed chunk never aborts the remaining chunks;
//! callers inspect the report to surface partial success.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{error, info, warn};

use crate::core::chunk::{ChunkError, chunk_text};
use crate::core::tts::{SpeechSynthesizer, TTSError};

/// Errors that prevent a synthesis run from starting.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error(transparent)]
    Chunk(#[from] ChunkError),
}

/// Options for one synthesis run.
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    /// Output file path. With multiple chunks the chunk index is inserted
    /// before the extension (`out.mp3` becomes `out_001.mp3`).
    pub output: PathBuf,
    /// Chunk budget override. Defaults to the provider's own per-request
    /// budget; text stays unsplit when neither is set.
    pub max_chars: Option<usize>,
}

/// Result of synthesizing a single chunk.
#[derive(Debug)]
pub struct ChunkOutcome {
    /// 1-based position of the chunk in the sequence
    pub index: usize,
    /// Character count of the submitted chunk
    pub chars: usize,
    /// Output path the chunk's audio was (or would have been) written to
    pub path: PathBuf,
    /// Bytes written to disk, zero on failure
    pub bytes_written: usize,
    /// Wall-clock time of the synthesis call plus file write
    pub elapsed: Duration,
    /// The failure for this chunk, if any
    pub error: Option<TTSError>,
}

impl ChunkOutcome {
    /// Whether this chunk was synthesized and written successfully.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Collected outcomes of one synthesis run.
#[derive(Debug, Default)]
pub struct SynthesisReport {
    pub outcomes: Vec<ChunkOutcome>,
}

impl SynthesisReport {
    /// True when the input produced no chunks at all.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of chunks synthesized and written successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of chunks that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Paths of successfully written files, in chunk order.
    pub fn written_files(&self) -> Vec<&Path> {
        self.outcomes
            .iter()
            .filter(|o| o.is_ok())
            .map(|o| o.path.as_path())
            .collect()
    }

    /// Total wall-clock time across all chunks.
    pub fn total_elapsed(&self) -> Duration {
        self.outcomes.iter().map(|o| o.elapsed).sum()
    }
}

/// Output path for chunk `index` (1-based) out of `total`.
///
/// A single chunk keeps the requested path; multiple chunks get the index
/// inserted before the extension so files sort in playback order.
pub fn chunk_output_path(base: &Path, index: usize, total: usize) -> PathBuf {
    if total <= 1 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = match base.extension() {
        Some(ext) => format!("{stem}_{index:03}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{index:03}"),
    };
    base.with_file_name(name)
}

/// Run one synthesis pass: chunk `text`, submit each chunk in order, and
/// write the returned audio next to `options.output`.
///
/// Empty input yields an empty report without any remote call; whether
/// that is an error is the caller's decision.
pub async fn synthesize_to_files(
    provider: &dyn SpeechSynthesizer,
    text: &str,
    options: &SynthesisOptions,
) -> Result<SynthesisReport, SynthesisError> {
    let limit = options.max_chars.or(provider.max_chars_per_request());
    let chunks = match limit {
        Some(budget) => chunk_text(text, budget)?,
        None if text.is_empty() => Vec::new(),
        None => vec![text.to_string()],
    };

    if chunks.is_empty() {
        info!("Input is empty, nothing to synthesize");
        return Ok(SynthesisReport::default());
    }

    let total = chunks.len();
    info!(
        provider = provider.name(),
        chunks = total,
        "Starting synthesis run"
    );

    let mut report = SynthesisReport::default();
    for (i, chunk) in chunks.iter().enumerate() {
        let index = i + 1;
        let chars = chunk.chars().count();
        if let Some(budget) = limit
            && chars > budget
        {
            // A single sentence longer than the budget is submitted whole;
            // the provider may reject it.
            warn!(index, chars, budget, "Chunk exceeds the request budget");
        }

        let path = chunk_output_path(&options.output, index, total);
        let start = Instant::now();
        let outcome = match provider.synthesize(chunk).await {
            Ok(audio) => match tokio::fs::write(&path, &audio).await {
                Ok(()) => {
                    let elapsed = start.elapsed();
                    info!(
                        index,
                        total,
                        bytes = audio.len(),
                        elapsed_secs = elapsed.as_secs_f64(),
                        "Audio content written to {}",
                        path.display()
                    );
                    ChunkOutcome {
                        index,
                        chars,
                        path,
                        bytes_written: audio.len(),
                        elapsed,
                        error: None,
                    }
                }
                Err(e) => ChunkOutcome {
                    index,
                    chars,
                    path,
                    bytes_written: 0,
                    elapsed: start.elapsed(),
                    error: Some(TTSError::Io(e)),
                },
            },
            Err(e) => {
                error!(index, total, error = %e, "Chunk synthesis failed");
                ChunkOutcome {
                    index,
                    chars,
                    path,
                    bytes_written: 0,
                    elapsed: start.elapsed(),
                    error: Some(e),
                }
            }
        };
        report.outcomes.push(outcome);
    }

    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        total_secs = report.total_elapsed().as_secs_f64(),
        "Synthesis run finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::Mutex;

    use crate::core::tts::TTSResult;

    /// Synthesizer stub that records submitted text and can fail on
    /// selected chunk indices.
    struct StubSynthesizer {
        budget: Option<usize>,
        fail_on: Vec<usize>,
        submitted: Mutex<Vec<String>>,
    }

    impl StubSynthesizer {
        fn new(budget: Option<usize>) -> Self {
            Self {
                budget,
                fail_on: Vec::new(),
                submitted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SpeechSynthesizer for StubSynthesizer {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn max_chars_per_request(&self) -> Option<usize> {
            self.budget
        }

        async fn synthesize(&self, text: &str) -> TTSResult<Bytes> {
            let mut submitted = self.submitted.lock().unwrap();
            submitted.push(text.to_string());
            if self.fail_on.contains(&submitted.len()) {
                return Err(TTSError::Provider {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(Bytes::from(format!("audio:{text}")))
        }

        fn provider_info(&self) -> serde_json::Value {
            serde_json::json!({ "provider": "stub" })
        }
    }

    #[test]
    fn test_chunk_output_path_single() {
        let base = Path::new("/tmp/out.mp3");
        assert_eq!(chunk_output_path(base, 1, 1), PathBuf::from("/tmp/out.mp3"));
    }

    #[test]
    fn test_chunk_output_path_multiple() {
        let base = Path::new("/tmp/out.mp3");
        assert_eq!(
            chunk_output_path(base, 2, 3),
            PathBuf::from("/tmp/out_002.mp3")
        );
    }

    #[test]
    fn test_chunk_output_path_no_extension() {
        let base = Path::new("/tmp/out");
        assert_eq!(chunk_output_path(base, 1, 2), PathBuf::from("/tmp/out_001"));
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_calls() {
        let stub = StubSynthesizer::new(Some(100));
        let options = SynthesisOptions {
            output: PathBuf::from("/tmp/never.mp3"),
            max_chars: None,
        };
        let report = synthesize_to_files(&stub, "", &options).await.unwrap();
        assert!(report.is_empty());
        assert!(stub.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chunks_submitted_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let stub = StubSynthesizer::new(Some(5));
        let options = SynthesisOptions {
            output: dir.path().join("out.mp3"),
            max_chars: None,
        };
        let report = synthesize_to_files(&stub, "A. B. C.", &options)
            .await
            .unwrap();

        assert_eq!(report.succeeded(), 2);
        let submitted = stub.submitted.lock().unwrap();
        assert_eq!(*submitted, vec!["A. ".to_string(), "B. C.".to_string()]);

        let files = report.written_files();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("out_001.mp3"));
        assert!(files[1].ends_with("out_002.mp3"));
        assert_eq!(std::fs::read(files[0]).unwrap(), b"audio:A. ");
    }

    #[tokio::test]
    async fn test_caller_budget_overrides_provider() {
        let dir = tempfile::tempdir().unwrap();
        let stub = StubSynthesizer::new(Some(5));
        let options = SynthesisOptions {
            output: dir.path().join("out.mp3"),
            max_chars: Some(1000),
        };
        let report = synthesize_to_files(&stub, "A. B. C.", &options)
            .await
            .unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert!(report.outcomes[0].path.ends_with("out.mp3"));
    }

    #[tokio::test]
    async fn test_failed_chunk_does_not_abort_rest() {
        let dir = tempfile::tempdir().unwrap();
        let stub = StubSynthesizer {
            fail_on: vec![2],
            ..StubSynthesizer::new(Some(4))
        };
        let options = SynthesisOptions {
            output: dir.path().join("out.mp3"),
            max_chars: None,
        };
        // Budget 4 packs this into exactly three chunks: "Aa. ", "Bb. ", "Cc."
        let report = synthesize_to_files(&stub, "Aa. Bb. Cc.", &options)
            .await
            .unwrap();

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(report.outcomes[0].is_ok());
        assert!(!report.outcomes[1].is_ok());
        assert!(report.outcomes[2].is_ok());
        // The failed chunk's file was never written.
        assert!(!report.outcomes[1].path.exists());
        assert!(report.outcomes[2].path.exists());
    }

    #[tokio::test]
    async fn test_zero_budget_rejected() {
        let stub = StubSynthesizer::new(None);
        let options = SynthesisOptions {
            output: PathBuf::from("/tmp/out.mp3"),
            max_chars: Some(0),
        };
        let result = synthesize_to_files(&stub, "Hello.", &options).await;
        assert!(matches!(
            result,
            Err(SynthesisError::Chunk(ChunkError::InvalidLimit))
        ));
    }

    #[tokio::test]
    async fn test_unlimited_provider_single_request() {
        let dir = tempfile::tempdir().unwrap();
        let stub = StubSynthesizer::new(None);
        let options = SynthesisOptions {
            output: dir.path().join("out.mp3"),
            max_chars: None,
        };
        let text = "First sentence. Second sentence. Third sentence.";
        let report = synthesize_to_files(&stub, text, &options).await.unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(*stub.submitted.lock().unwrap(), vec![text.to_string()]);
    }
}
