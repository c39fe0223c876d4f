use super::sentence_alignment::SentenceAlignment;
use crate::text::domain::sentence::Sentence;

/// Reference words skipped between two neighboring alignments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentGap {
    /// Id of the utterance whose right boundary opens the gap.
    pub after_utterance_id: String,
    /// Document word range `[start, end)` of the missing region.
    pub start: usize,
    pub end: usize,
    pub missing_text: String,
}

/// Extracts the document spans between each non-exact right boundary and
/// the following alignment. Diagnostic only: records are not modified.
/// Requires boundary classification to have run.
pub fn missing_words(records: &[SentenceAlignment], document: &Sentence) -> Vec<AlignmentGap> {
    let mut gaps = Vec::new();
    for pair in records.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if !current.right_exact {
            gaps.push(AlignmentGap {
                after_utterance_id: current.utterance_id.clone(),
                start: current.end,
                end: next.start,
                missing_text: document.slice(current.end, next.start).text(),
            });
        }
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::domain::boundary_classifier::BoundaryClassifier;
    use crate::text::domain::tokenizer::Tokenizer;
    use crate::text::infrastructure::word_tokenizer::WordTokenizer;

    fn document() -> Sentence {
        WordTokenizer::new().tokenize("a b c d e f g h i j", "doc")
    }

    fn record(id: &str, start: usize, end: usize) -> SentenceAlignment {
        SentenceAlignment::new(id, "", "", start, end, 0.0)
    }

    #[test]
    fn test_reports_span_between_non_exact_neighbors() {
        let mut records = vec![record("u1", 0, 3), record("u2", 5, 8)];
        BoundaryClassifier::classify(&mut records, 10);
        let gaps = missing_words(&records, &document());
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].after_utterance_id, "u1");
        assert_eq!((gaps[0].start, gaps[0].end), (3, 5));
        assert_eq!(gaps[0].missing_text, "d e");
    }

    #[test]
    fn test_abutting_records_produce_no_gap() {
        let mut records = vec![record("u1", 0, 4), record("u2", 4, 10)];
        BoundaryClassifier::classify(&mut records, 10);
        assert!(missing_words(&records, &document()).is_empty());
    }

    #[test]
    fn test_last_record_never_reported() {
        let mut records = vec![record("u1", 0, 4), record("u2", 4, 7)];
        BoundaryClassifier::classify(&mut records, 10);
        // u2's right boundary is not exact, but there is no next record.
        assert!(missing_words(&records, &document()).is_empty());
    }

    #[test]
    fn test_overlapping_records_yield_empty_text() {
        let mut records = vec![record("u1", 0, 6), record("u2", 4, 10)];
        BoundaryClassifier::classify(&mut records, 10);
        let gaps = missing_words(&records, &document());
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].missing_text, "");
    }

    #[test]
    fn test_records_unchanged() {
        let mut records = vec![record("u1", 0, 3), record("u2", 5, 8)];
        BoundaryClassifier::classify(&mut records, 10);
        let before: Vec<(usize, usize)> = records.iter().map(|r| (r.start, r.end)).collect();
        let _ = missing_words(&records, &document());
        let after: Vec<(usize, usize)> = records.iter().map(|r| (r.start, r.end)).collect();
        assert_eq!(before, after);
    }
}
