//! Aligns a stream of ASR-transcribed utterances against a single reference
//! text, producing for each utterance the best-matching contiguous span of
//! the reference plus a normalized dissimilarity score.
//!
//! The search is driven sequentially: each utterance is matched inside a
//! moving window anchored at the end of the previous successful alignment,
//! with the window widening after failures and a bounded relocation protocol
//! for sustained runs of misalignment.

pub mod alignment;
pub mod distance;
pub mod pipeline;
pub mod search;
pub mod shared;
pub mod text;
