/// Ordered, immutable sequence of normalized words from one utterance or
/// one reference document, 0-indexed in word space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    id: String,
    words: Vec<String>,
    char_count: usize,
}

impl Sentence {
    pub fn new(id: impl Into<String>, words: Vec<String>) -> Self {
        let char_count = words.iter().map(|w| w.chars().count()).sum();
        Self {
            id: id.into(),
            words,
            char_count,
        }
    }

    /// Opaque identifier used for reporting (utterance id, or a document name).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn words_count(&self) -> usize {
        self.words.len()
    }

    /// Total characters across all words, separators excluded.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sub-sequence over `[start, end)` in word-index space, carrying the
    /// same id and normalization. Indices are clamped to the word count.
    pub fn slice(&self, start: usize, end: usize) -> Sentence {
        let end = end.min(self.words.len());
        let start = start.min(end);
        Sentence::new(self.id.clone(), self.words[start..end].to_vec())
    }

    /// Words joined with single spaces, for display and reporting.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}
