use crate::alignment::domain::aligner_config::AlignerConfig;
use crate::alignment::domain::sentence_alignment::SentenceAlignment;
use crate::pipeline::alignment_logger::AlignmentLogger;
use crate::search::domain::window_search::WindowSearch;
use crate::shared::constants::{
    DISTANCE_THRESHOLD, MAX_CONSECUTIVE_UNALIGNED, MAX_RANGE_THRESHOLD, SLACK_GROWTH_BASE,
    WORD_RANGE,
};
use crate::shared::error::AlignError;
use crate::text::domain::sentence::Sentence;

/// Search-placement state threaded through the per-utterance steps.
///
/// `anchor` marks the end of the most recent accepted alignment; `slack` is
/// the extra margin accumulated over failed alignments and reset on success.
#[derive(Clone, Debug)]
struct DriverState {
    anchor: usize,
    slack: usize,
    consecutive_failures: usize,
    relocation_budget: usize,
    first_success_seen: bool,
}

impl DriverState {
    fn new(relocation_budget: usize) -> Self {
        Self {
            anchor: 0,
            slack: 0,
            consecutive_failures: 0,
            relocation_budget,
            first_success_seen: false,
        }
    }

    fn succeed_at(&mut self, end: usize) {
        self.anchor = end;
        self.slack = 0;
        self.consecutive_failures = 0;
        self.first_success_seen = true;
    }
}

/// Sequential alignment driver.
///
/// Consumes utterances strictly in order, matching each inside a moving
/// window of the reference document. Failed matches widen the window;
/// sustained runs of failures trigger a budgeted relocation of the search
/// range. Fatal conditions abort the whole run with no partial output.
pub struct Aligner {
    search: Box<dyn WindowSearch>,
    config: AlignerConfig,
}

impl Aligner {
    pub fn new(search: Box<dyn WindowSearch>, config: AlignerConfig) -> Self {
        Self { search, config }
    }

    /// Align every utterance against `document`, in input order.
    ///
    /// On success the returned records correspond one-to-one to `utterances`.
    /// Boundary flags are left for the boundary classifier.
    pub fn align(
        &self,
        document: &Sentence,
        utterances: &[Sentence],
        logger: &mut dyn AlignmentLogger,
    ) -> Result<Vec<SentenceAlignment>, AlignError> {
        let document_len = document.words_count();
        let mut state = DriverState::new(self.config.relocation_budget());
        let mut records: Vec<SentenceAlignment> = Vec::with_capacity(utterances.len());

        for (index, utterance) in utterances.iter().enumerate() {
            logger.progress(index + 1, utterances.len());
            let utterance_len = utterance.words_count();
            let (mut range_start, mut range_end) = window(&state, utterance_len, document_len);

            if range_end - range_start > MAX_RANGE_THRESHOLD {
                if state.first_success_seen {
                    return Err(AlignError::SearchRangeExceeded {
                        utterance_id: utterance.id().to_string(),
                        window_len: range_end - range_start,
                        cap: MAX_RANGE_THRESHOLD,
                    });
                }
                // Nothing has matched yet: treat the opening stretch as
                // unalignable preamble and jump past it.
                state.anchor = MAX_RANGE_THRESHOLD;
                state.slack = 0;
                (range_start, range_end) = window(&state, utterance_len, document_len);
            }

            if state.consecutive_failures >= MAX_CONSECUTIVE_UNALIGNED {
                if state.relocation_budget == 0 {
                    return Err(AlignError::RelocationBudgetExhausted {
                        utterance_id: utterance.id().to_string(),
                        budget: self.config.relocation_budget(),
                    });
                }
                state.relocation_budget -= 1;
                logger.info(&format!(
                    "{} consecutive utterances above the distance threshold, relocating search range",
                    state.consecutive_failures
                ));
                let last_end = records.last().map(|r| r.end).unwrap_or(0);
                self.recover(document, utterances, index, last_end, range_end, &mut state)?;
                (range_start, range_end) = window(&state, utterance_len, document_len);
            }

            let search_window = document.slice(range_start, range_end);
            let found = self.search.best_span(&search_window, utterance);
            let start = range_start + found.start;
            let end = range_start + found.end;

            let mut record = SentenceAlignment::new(
                utterance.id(),
                utterance.text(),
                document.slice(start, end).text(),
                start,
                end,
                found.distance,
            );

            if found.distance > DISTANCE_THRESHOLD {
                record.above_threshold = true;
                logger.above_threshold(&record, &search_window.text());
                state.slack += SLACK_GROWTH_BASE + utterance_len;
                state.consecutive_failures += 1;
            } else {
                state.succeed_at(end);
            }
            records.push(record);
        }
        Ok(records)
    }

    /// Relocate the search range after a sustained run of failures.
    ///
    /// Starting at the previous matched end, re-search the last
    /// `MAX_CONSECUTIVE_UNALIGNED` utterances with a window that widens and
    /// slides forward after every full failed pass, until one of them
    /// matches below the threshold. Already-emitted records stay untouched;
    /// only the placement state moves. Fails with `RecoveryStalled` once the
    /// window has slid past the end of the document.
    fn recover(
        &self,
        document: &Sentence,
        utterances: &[Sentence],
        index: usize,
        last_end: usize,
        previous_range_end: usize,
        state: &mut DriverState,
    ) -> Result<(), AlignError> {
        let document_len = document.words_count();
        let current_len = utterances[index].words_count();
        let lookback_from = index.saturating_sub(MAX_CONSECUTIVE_UNALIGNED);

        let mut range_start = last_end;
        let mut range_end = previous_range_end.max(range_start + WORD_RANGE);
        let mut slack = state.slack;

        loop {
            for recent in &utterances[lookback_from..index] {
                let search_window = document.slice(range_start, range_end);
                let found = self.search.best_span(&search_window, recent);
                if found.distance <= DISTANCE_THRESHOLD {
                    state.succeed_at(range_start + found.end);
                    return Ok(());
                }
                slack += SLACK_GROWTH_BASE + recent.words_count();
            }

            let next_start = range_start + slack;
            if next_start >= document_len {
                return Err(AlignError::RecoveryStalled {
                    utterance_id: utterances[index].id().to_string(),
                    lookback: MAX_CONSECUTIVE_UNALIGNED,
                });
            }
            range_start = next_start;
            range_end = (next_start + MAX_RANGE_THRESHOLD)
                .min(next_start + 2 * (WORD_RANGE + slack) + current_len)
                .min(document_len + 1);
        }
    }
}

/// The search window for the current state: centered `WORD_RANGE + slack`
/// words around the anchor, extended by the utterance length, clamped to
/// the document.
fn window(state: &DriverState, utterance_len: usize, document_len: usize) -> (usize, usize) {
    let range_start = state.anchor.saturating_sub(WORD_RANGE + state.slack);
    let range_end =
        (range_start + 2 * (WORD_RANGE + state.slack) + utterance_len).min(document_len + 1);
    (range_start, range_end)
}
