//! Text tokenization
//!
//! Splits raw text into the counts the readability formulas need:
//! - sentences: fragments between runs of `.`, `!` and `?`
//! - words: maximal runs of letters and digits, lowercased
//! - characters: every non-whitespace character, punctuation included

mod syllables;

pub use syllables::{is_polysyllabic, syllable_count, POLYSYLLABLE_THRESHOLD};

use regex::Regex;
use std::sync::OnceLock;

static SENTENCE_DELIMITERS: OnceLock<Regex> = OnceLock::new();
static WORD_SEPARATORS: OnceLock<Regex> = OnceLock::new();

fn sentence_delimiters() -> &'static Regex {
    SENTENCE_DELIMITERS.get_or_init(|| Regex::new(r"[.!?]+").expect("valid sentence regex"))
}

fn word_separators() -> &'static Regex {
    WORD_SEPARATORS.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid word regex"))
}

/// Result of tokenizing one text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub sentences: usize,
    pub words: usize,
    pub characters: usize,
    /// Lowercase words in text order
    pub word_list: Vec<String>,
}

/// Tokenize `text`. The empty string yields all-zero counts.
pub fn tokenize(text: &str) -> Tokens {
    let word_list = split_words(text);
    Tokens {
        sentences: count_sentences(text),
        words: word_list.len(),
        characters: count_characters(text),
        word_list,
    }
}

/// Count fragments between sentence delimiters that hold more than whitespace
pub fn count_sentences(text: &str) -> usize {
    sentence_delimiters()
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Lowercase `text` and split it on runs of non-alphanumeric characters
pub fn split_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_separators()
        .split(&lowered)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count characters that are not whitespace
pub fn count_characters(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
