use thiserror::Error;

/// Fatal conditions of an alignment run.
///
/// All variants abort the whole pass; there is no partial-success mode.
/// Per-utterance above-threshold matches are quality flags on the records,
/// not errors.
#[derive(Error, Debug)]
pub enum AlignError {
    #[error("section values must be strictly increasing: {previous} followed by {current}")]
    NonIncreasingSections { previous: u32, current: u32 },

    #[error(
        "search window grew to {window_len} words (cap {cap}) at utterance {utterance_id} \
         after an alignment had already been found"
    )]
    SearchRangeExceeded {
        utterance_id: String,
        window_len: usize,
        cap: usize,
    },

    #[error(
        "relocation budget of {budget} exhausted at utterance {utterance_id}; \
         the utterance stream no longer matches the reference text"
    )]
    RelocationBudgetExhausted { utterance_id: String, budget: usize },

    #[error(
        "recovery reached the end of the reference text without re-aligning any of the \
         last {lookback} utterances (at utterance {utterance_id})"
    )]
    RecoveryStalled {
        utterance_id: String,
        lookback: usize,
    },
}
