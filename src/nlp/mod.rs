//! Natural language processing components.
//!
//! Sentence/word tokenization and the constant stopword table.

pub mod stopwords;
pub mod tokenizer;
