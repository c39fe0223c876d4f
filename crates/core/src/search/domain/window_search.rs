use crate::shared::constants::SPAN_LENGTH_TOLERANCE;
use crate::text::domain::sentence::Sentence;

/// Best-matching sub-span of a search window for one utterance.
/// `start`/`end` are window-relative word indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanMatch {
    pub start: usize,
    pub end: usize,
    pub distance: f64,
}

/// Finds the sub-span of a window minimizing the distance to an utterance.
///
/// Pure function of its inputs. Ties between equal minima resolve to the
/// first candidate in enumeration order (`end` ascending, then `start`
/// ascending), so results are deterministic for a fixed window and
/// utterance regardless of how candidates are evaluated.
pub trait WindowSearch {
    fn best_span(&self, window: &Sentence, utterance: &Sentence) -> SpanMatch;
}

/// Candidate spans for a window of `window_len` words: every `[start, end)`
/// with `end` in `0..=window_len` and `start` in
/// `max(0, end - utterance_len - 10)..end`. Span length is thereby bounded
/// by `utterance_len + 10`.
pub fn candidate_spans(window_len: usize, utterance_len: usize) -> Vec<(usize, usize)> {
    let max_span_len = utterance_len + SPAN_LENGTH_TOLERANCE;
    let mut spans = Vec::new();
    for end in 0..=window_len {
        for start in end.saturating_sub(max_span_len)..end {
            spans.push((start, end));
        }
    }
    spans
}

/// `true` if `candidate` beats `incumbent`: strictly smaller distance, or an
/// equal distance reached earlier in enumeration order.
pub(crate) fn improves(
    candidate: (usize, SpanMatch),
    incumbent: Option<(usize, SpanMatch)>,
) -> bool {
    match incumbent {
        None => true,
        Some((best_index, best)) => {
            candidate.1.distance < best.distance
                || (candidate.1.distance == best.distance && candidate.0 < best_index)
        }
    }
}
