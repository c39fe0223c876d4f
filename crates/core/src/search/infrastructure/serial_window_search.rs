use crate::distance::domain::sentence_distance::SentenceDistance;
use crate::search::domain::window_search::{candidate_spans, improves, SpanMatch, WindowSearch};
use crate::text::domain::sentence::Sentence;

/// Single-threaded window search. Reference implementation for tests and
/// for callers where the per-utterance window is too small to justify a
/// worker pool.
pub struct SerialWindowSearch {
    distance: Box<dyn SentenceDistance>,
}

impl SerialWindowSearch {
    pub fn new(distance: Box<dyn SentenceDistance>) -> Self {
        Self { distance }
    }
}

impl WindowSearch for SerialWindowSearch {
    fn best_span(&self, window: &Sentence, utterance: &Sentence) -> SpanMatch {
        let words = window.words();
        let target = utterance.words();
        let mut best: Option<(usize, SpanMatch)> = None;

        for (index, (start, end)) in candidate_spans(words.len(), target.len())
            .into_iter()
            .enumerate()
        {
            let distance = self.distance.distance(&words[start..end], target);
            let candidate = (index, SpanMatch { start, end, distance });
            if improves(candidate, best) {
                best = Some(candidate);
            }
        }

        // Empty window: the driver never produces one, but degrade to a
        // non-alignable empty span rather than panic.
        best.map(|(_, span)| span).unwrap_or(SpanMatch {
            start: 0,
            end: 0,
            distance: 1.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::infrastructure::levenshtein_distance::LevenshteinDistance;
    use crate::text::infrastructure::word_tokenizer::WordTokenizer;
    use crate::text::domain::tokenizer::Tokenizer;
    use approx::assert_relative_eq;

    fn search() -> SerialWindowSearch {
        SerialWindowSearch::new(Box::new(LevenshteinDistance::new()))
    }

    fn sentence(text: &str) -> Sentence {
        WordTokenizer::new().tokenize(text, "t")
    }

    #[test]
    fn test_finds_exact_sub_span() {
        let window = sentence("the quick brown fox jumps over the lazy dog");
        let utterance = sentence("brown fox jumps");
        let m = search().best_span(&window, &utterance);
        assert_eq!((m.start, m.end), (2, 5));
        assert_relative_eq!(m.distance, 0.0);
    }

    #[test]
    fn test_span_may_touch_window_end() {
        let window = sentence("the quick brown fox jumps");
        let utterance = sentence("fox jumps");
        let m = search().best_span(&window, &utterance);
        assert_eq!((m.start, m.end), (3, 5));
        assert_relative_eq!(m.distance, 0.0);
    }

    #[test]
    fn test_misspelled_utterance_still_matches() {
        let window = sentence("the quick brown fox jumps");
        let utterance = sentence("teh quick brown");
        let m = search().best_span(&window, &utterance);
        assert_eq!((m.start, m.end), (0, 3));
        assert!(m.distance > 0.0);
        assert!(m.distance < 0.2);
    }

    #[test]
    fn test_tie_breaks_to_first_enumerated() {
        // Identical halves: both [0,1) and [1,2) are exact matches; the
        // earlier end wins.
        let window = sentence("echo echo");
        let utterance = sentence("echo");
        let m = search().best_span(&window, &utterance);
        assert_eq!((m.start, m.end), (0, 1));
        assert_relative_eq!(m.distance, 0.0);
    }

    #[test]
    fn test_empty_window_degrades() {
        let window = sentence("");
        let utterance = sentence("anything");
        let m = search().best_span(&window, &utterance);
        assert_eq!((m.start, m.end), (0, 0));
        assert_relative_eq!(m.distance, 1.0);
    }
}
