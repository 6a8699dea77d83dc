//! Sentence and word tokenization.
//!
//! Sentence segmentation consumes runs of terminal punctuation (`.`, `!`,
//! `?`) into the preceding sentence and discards short fragments. Word
//! tokenization lowercases, strips non-word punctuation (hyphens survive),
//! and filters short tokens and stopwords. Both are deterministic: identical
//! input always yields identical output.

use crate::errors::SummarizeError;
use crate::nlp::stopwords::is_stopword;
use crate::types::Sentence;

/// Minimum character count (exclusive) for a segment to count as a sentence.
const MIN_SENTENCE_CHARS: usize = 20;

/// Minimum character count (exclusive) for a word token to be kept.
const MIN_TOKEN_CHARS: usize = 2;

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split raw text into sentences.
///
/// Newline runs collapse to a single space before segmentation. A sentence is
/// a maximal run of non-terminal characters followed by one or more terminal
/// punctuation characters; trailing text without a terminator is dropped.
/// Trimmed segments of more than [`MIN_SENTENCE_CHARS`] characters are kept
/// and numbered with their 0-based `original_index` in the filtered sequence.
///
/// Returns [`SummarizeError::EmptyDocument`] when no sentences qualify.
pub fn split_sentences(text: &str) -> Result<Vec<Sentence>, SummarizeError> {
    let mut flattened = String::with_capacity(text.len());
    let mut in_newline = false;
    for c in text.chars() {
        if c == '\n' || c == '\r' {
            in_newline = true;
        } else {
            if in_newline {
                flattened.push(' ');
                in_newline = false;
            }
            flattened.push(c);
        }
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut saw_terminal = false;
    for c in flattened.chars() {
        if is_terminal(c) {
            current.push(c);
            saw_terminal = true;
        } else {
            if saw_terminal {
                push_sentence(&mut sentences, &current);
                current.clear();
                saw_terminal = false;
            }
            current.push(c);
        }
    }
    if saw_terminal {
        push_sentence(&mut sentences, &current);
    }

    if sentences.is_empty() {
        return Err(SummarizeError::EmptyDocument);
    }
    Ok(sentences)
}

fn push_sentence(sentences: &mut Vec<Sentence>, segment: &str) {
    let trimmed = segment.trim();
    if trimmed.chars().count() > MIN_SENTENCE_CHARS {
        sentences.push(Sentence {
            original_index: sentences.len(),
            text: trimmed.to_string(),
        });
    }
}

/// Split text into filtered word tokens.
///
/// Lowercases, replaces every character that is not a word character,
/// whitespace, or hyphen with a space, splits on whitespace, and keeps
/// tokens longer than [`MIN_TOKEN_CHARS`] characters that are not stopwords.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.chars().count() > MIN_TOKEN_CHARS && !is_stopword(w))
        .map(|w| w.to_string())
        .collect()
}
