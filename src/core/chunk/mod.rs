//! Sentence-aware text chunking for character-limited synthesis APIs.
//!
//! Several TTS endpoints cap the amount of text accepted per request, so
//! long input has to be split before submission. [`chunk_text`] splits on
//! sentence boundaries where possible and greedily packs whole sentences
//! into chunks that stay within a caller-supplied character budget.
//!
//! Sentence detection is the literal separator `". "`. This deliberately
//! minimal heuristic does not recognize `!`, `?`, abbreviations, or
//! multi-space separators; such text simply stays inside one fragment.
//! A single sentence longer than the budget is emitted as one oversized
//! chunk rather than being cut mid-sentence; callers needing a hard
//! per-chunk ceiling must pre-validate fragment lengths.
//!
//! # Example
//!
//! ```
//! use voxbench::core::chunk::chunk_text;
//!
//! let chunks = chunk_text("A. B. C.", 5).unwrap();
//! assert_eq!(chunks, vec!["A. ", "B. C."]);
//! ```

use thiserror::Error;

/// Literal separator used for sentence splitting.
const SENTENCE_SEPARATOR: &str = ". ";

/// Errors from [`chunk_text`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    /// The chunk limit must be at least one character.
    #[error("chunk limit must be greater than zero")]
    InvalidLimit,
}

/// Split `text` into ordered chunks of at most `max_chars` characters,
/// breaking preferentially at sentence boundaries.
///
/// Embedded newlines are normalized to spaces before splitting. The
/// sentence separator is restored to every fragment except the last, so
/// concatenating the returned chunks reproduces the normalized input.
/// Limits are counted in Unicode scalar values, not bytes.
///
/// Empty input yields an empty sequence; whether zero chunks is an error
/// is the caller's decision. A `max_chars` of zero is rejected.
pub fn chunk_text(text: &str, max_chars: usize) -> Result<Vec<String>, ChunkError> {
    if max_chars == 0 {
        return Err(ChunkError::InvalidLimit);
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let normalized = text.replace(['\r', '\n'], " ");
    let fragments: Vec<&str> = normalized.split(SENTENCE_SEPARATOR).collect();
    let last = fragments.len() - 1;

    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_chars = 0usize;

    for (i, fragment) in fragments.iter().enumerate() {
        // Input ending in ". " leaves an empty final fragment; dropping it
        // lets the preceding fragment keep its restored separator.
        if i == last && fragment.is_empty() {
            continue;
        }

        let separator = if i < last { SENTENCE_SEPARATOR } else { "" };
        let piece_chars = fragment.chars().count() + separator.chars().count();

        if buffer_chars > 0 && buffer_chars + piece_chars > max_chars {
            chunks.push(std::mem::take(&mut buffer));
            buffer_chars = 0;
        }

        buffer.push_str(fragment);
        buffer.push_str(separator);
        buffer_chars += piece_chars;
    }

    if !buffer.is_empty() {
        chunks.push(buffer);
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(chunk_text("Hello.", 0), Err(ChunkError::InvalidLimit));
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert_eq!(chunk_text("", 100).unwrap(), Vec::<String>::new());
        assert_eq!(chunk_text("", 1).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk_text("Hello world.", 1000).unwrap();
        assert_eq!(chunks, vec!["Hello world."]);
    }

    #[test]
    fn test_greedy_packing() {
        // "A. " is 3 chars; adding "B. " would reach 6 > 5, so the buffer
        // closes and "B. " + "C." pack into the second chunk.
        let chunks = chunk_text("A. B. C.", 5).unwrap();
        assert_eq!(chunks, vec!["A. ", "B. C."]);
    }

    #[test]
    fn test_concatenation_reproduces_normalized_input() {
        let text = "First sentence. Second sentence. Third sentence. Fourth.";
        let chunks = chunk_text(text, 20).unwrap();
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_newlines_normalized_to_spaces() {
        let chunks = chunk_text("First line. \nSecond\nline.", 1000).unwrap();
        assert_eq!(chunks.concat(), "First line.  Second line.");
    }

    #[test]
    fn test_no_chunk_empty() {
        for limit in [1, 3, 7, 50] {
            for chunk in chunk_text("One. Two. Three. Four. Five.", limit).unwrap() {
                assert!(!chunk.is_empty(), "empty chunk at limit {limit}");
            }
        }
    }

    #[test]
    fn test_chunks_respect_limit() {
        let text = "Alpha beta. Gamma delta. Epsilon zeta. Eta theta.";
        for chunk in chunk_text(text, 15).unwrap() {
            assert!(
                chunk.chars().count() <= 15,
                "chunk {chunk:?} exceeds limit"
            );
        }
    }

    #[test]
    fn test_oversized_fragment_emitted_whole() {
        let long = "This single sentence runs well past the configured budget";
        assert!(long.chars().count() > 10);
        let chunks = chunk_text(long, 10).unwrap();
        assert_eq!(chunks, vec![long]);
    }

    #[test]
    fn test_oversized_fragment_between_normal_ones() {
        let text = "Hi. An extremely long middle sentence without breaks. Bye.";
        let chunks = chunk_text(text, 10).unwrap();
        assert_eq!(
            chunks,
            vec![
                "Hi. ",
                "An extremely long middle sentence without breaks. ",
                "Bye."
            ]
        );
    }

    #[test]
    fn test_trailing_separator_preserved() {
        let chunks = chunk_text("First. Second. ", 1000).unwrap();
        assert_eq!(chunks, vec!["First. Second. "]);
        assert!(chunks.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_no_separator_present() {
        // Question marks and exclamation points are not boundaries.
        let text = "Is this split? No! It stays whole";
        let chunks = chunk_text(text, 10).unwrap();
        assert_eq!(chunks, vec![text]);
    }

    #[test]
    fn test_limits_count_chars_not_bytes() {
        // Three Devanagari sentences, each fragment well under 20 chars
        // but over 20 bytes.
        let text = "नमस्ते दुनिया. आप कैसे हैं. धन्यवाद.";
        let chunks = chunk_text(text, 20).unwrap();
        assert!(chunks.len() > 1);
        assert_eq!(chunks.concat(), text);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 20);
        }
    }

    #[test]
    fn test_order_preserved() {
        let text = "One. Two. Three. Four. Five. Six.";
        let chunks = chunk_text(text, 12).unwrap();
        let mut pos = 0;
        for chunk in &chunks {
            let found = text[pos..].find(chunk.trim_end()).map(|i| i + pos);
            assert!(found.is_some(), "chunk {chunk:?} out of order");
            pos = found.unwrap();
        }
    }
}
