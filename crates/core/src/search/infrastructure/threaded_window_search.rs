use crate::distance::domain::sentence_distance::SentenceDistance;
use crate::search::domain::window_search::{candidate_spans, improves, SpanMatch, WindowSearch};
use crate::shared::constants::DEFAULT_SEARCH_WORKERS;
use crate::text::domain::sentence::Sentence;

/// Candidates per work unit sent to the pool. Large enough to amortize
/// channel traffic, small enough to keep all workers busy on mid-size
/// windows.
const BATCH_SIZE: usize = 256;

/// Window search over a fixed-size worker pool.
///
/// Candidate spans are independent pure computations, so they are streamed
/// in batches over bounded channels to `workers` threads. Each worker keeps
/// the best candidate of its batches; the reducer takes the minimum by
/// `(distance, enumeration index)`, which preserves the serial tie-break
/// regardless of scheduling order.
pub struct ThreadedWindowSearch {
    distance: Box<dyn SentenceDistance>,
    workers: usize,
}

impl ThreadedWindowSearch {
    pub fn new(distance: Box<dyn SentenceDistance>) -> Self {
        Self::with_workers(distance, DEFAULT_SEARCH_WORKERS)
    }

    pub fn with_workers(distance: Box<dyn SentenceDistance>, workers: usize) -> Self {
        Self {
            distance,
            workers: workers.max(1),
        }
    }
}

impl WindowSearch for ThreadedWindowSearch {
    fn best_span(&self, window: &Sentence, utterance: &Sentence) -> SpanMatch {
        let words = window.words();
        let target = utterance.words();
        let spans = candidate_spans(words.len(), target.len());
        if spans.is_empty() {
            return SpanMatch {
                start: 0,
                end: 0,
                distance: 1.0,
            };
        }

        let distance = &*self.distance;
        let (batch_tx, batch_rx) =
            crossbeam_channel::bounded::<(usize, &[(usize, usize)])>(self.workers * 2);
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, SpanMatch)>();

        std::thread::scope(|scope| {
            for _ in 0..self.workers {
                let batch_rx = batch_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    for (base_index, batch) in batch_rx {
                        let mut best: Option<(usize, SpanMatch)> = None;
                        for (offset, &(start, end)) in batch.iter().enumerate() {
                            let d = distance.distance(&words[start..end], target);
                            let candidate = (
                                base_index + offset,
                                SpanMatch {
                                    start,
                                    end,
                                    distance: d,
                                },
                            );
                            if improves(candidate, best) {
                                best = Some(candidate);
                            }
                        }
                        if let Some(found) = best {
                            if result_tx.send(found).is_err() {
                                break;
                            }
                        }
                    }
                });
            }
            drop(batch_rx);
            drop(result_tx);

            for (batch_number, batch) in spans.chunks(BATCH_SIZE).enumerate() {
                if batch_tx.send((batch_number * BATCH_SIZE, batch)).is_err() {
                    break;
                }
            }
            drop(batch_tx);

            let mut best: Option<(usize, SpanMatch)> = None;
            for candidate in result_rx {
                if improves(candidate, best) {
                    best = Some(candidate);
                }
            }
            best.map(|(_, span)| span).unwrap_or(SpanMatch {
                start: 0,
                end: 0,
                distance: 1.0,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::infrastructure::levenshtein_distance::LevenshteinDistance;
    use crate::search::infrastructure::serial_window_search::SerialWindowSearch;
    use crate::text::domain::tokenizer::Tokenizer;
    use crate::text::infrastructure::word_tokenizer::WordTokenizer;
    use approx::assert_relative_eq;

    fn sentence(text: &str) -> Sentence {
        WordTokenizer::new().tokenize(text, "t")
    }

    fn threaded(workers: usize) -> ThreadedWindowSearch {
        ThreadedWindowSearch::with_workers(Box::new(LevenshteinDistance::new()), workers)
    }

    #[test]
    fn test_finds_exact_sub_span() {
        let window = sentence("the quick brown fox jumps over the lazy dog");
        let utterance = sentence("quick brown fox");
        let m = threaded(4).best_span(&window, &utterance);
        assert_eq!((m.start, m.end), (1, 4));
        assert_relative_eq!(m.distance, 0.0);
    }

    #[test]
    fn test_matches_serial_result() {
        let window = sentence(
            "it was the best of times it was the worst of times it was the age of wisdom \
             it was the age of foolishness it was the epoch of belief",
        );
        let serial = SerialWindowSearch::new(Box::new(LevenshteinDistance::new()));
        for text in ["the worst of times", "age of wisdm", "epoch of belief", "zzz qqq"] {
            let utterance = sentence(text);
            let expected = serial.best_span(&window, &utterance);
            let got = threaded(4).best_span(&window, &utterance);
            assert_eq!((got.start, got.end), (expected.start, expected.end), "{text}");
            assert_relative_eq!(got.distance, expected.distance);
        }
    }

    #[test]
    fn test_deterministic_across_runs_and_worker_counts() {
        let window = sentence("alpha beta alpha beta alpha beta alpha beta alpha beta");
        let utterance = sentence("alpha beta");
        let first = threaded(1).best_span(&window, &utterance);
        for workers in [1, 2, 4, 8] {
            for _ in 0..5 {
                let m = threaded(workers).best_span(&window, &utterance);
                assert_eq!((m.start, m.end), (first.start, first.end));
                assert_relative_eq!(m.distance, first.distance);
            }
        }
        // Repeated content: the tie must resolve to the first enumerated span.
        assert_eq!((first.start, first.end), (0, 2));
    }

    #[test]
    fn test_empty_window_degrades() {
        let m = threaded(4).best_span(&sentence(""), &sentence("abc"));
        assert_eq!((m.start, m.end), (0, 0));
        assert_relative_eq!(m.distance, 1.0);
    }

    #[test]
    fn test_more_workers_than_batches() {
        let window = sentence("one two three");
        let utterance = sentence("two three");
        let m = threaded(16).best_span(&window, &utterance);
        assert_eq!((m.start, m.end), (1, 3));
    }
}
