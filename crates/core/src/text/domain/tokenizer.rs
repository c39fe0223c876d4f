use super::sentence::Sentence;

/// Turns raw text into an ordered, comparable word sequence.
///
/// Implementations must be deterministic and side-effect free: the same
/// input always yields the same word sequence.
pub trait Tokenizer {
    fn tokenize(&self, raw_text: &str, id: &str) -> Sentence;
}
