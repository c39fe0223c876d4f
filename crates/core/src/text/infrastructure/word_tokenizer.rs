use crate::text::domain::sentence::Sentence;
use crate::text::domain::tokenizer::Tokenizer;

/// Normalizing word tokenizer: lower-cases, drops punctuation, and splits
/// on whitespace. Apostrophes inside words are kept so contractions stay
/// single tokens.
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, raw_text: &str, id: &str) -> Sentence {
        let mut normalized = String::with_capacity(raw_text.len());
        for c in raw_text.chars() {
            if c.is_alphanumeric() || c == '\'' {
                for lower in c.to_lowercase() {
                    normalized.push(lower);
                }
            } else {
                normalized.push(' ');
            }
        }

        let words = normalized
            .split_whitespace()
            .map(|w| w.trim_matches('\''))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Sentence::new(id, words)
    }
}
