//! Error types for the summarization pipeline.

use thiserror::Error;

/// Errors produced by [`crate::summarize`].
///
/// The pipeline treats every numeric edge case (zero vector norms, empty
/// token lists, zero score variance) as a defined non-error outcome; the only
/// failure mode is a document that yields no usable sentences.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummarizeError {
    /// Sentence tokenization produced zero qualifying sentences: the text is
    /// too short, or contains no terminal punctuation above the length filter.
    #[error("no qualifying sentences found in document")]
    EmptyDocument,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = SummarizeError::EmptyDocument;
        assert_eq!(
            err.to_string(),
            "no qualifying sentences found in document"
        );
    }
}
