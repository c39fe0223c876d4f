/// Base search margin around the anchor, in words.
pub const WORD_RANGE: usize = 40;

/// Normalized distance above which an alignment is flagged low-confidence.
pub const DISTANCE_THRESHOLD: f64 = 0.2;

/// Hard cap on the search window length, in words.
pub const MAX_RANGE_THRESHOLD: usize = 2000;

/// Consecutive above-threshold alignments before the search range is relocated.
pub const MAX_CONSECUTIVE_UNALIGNED: usize = 5;

/// Extra words a candidate span may have beyond the utterance length,
/// tolerating minor ASR length mismatch.
pub const SPAN_LENGTH_TOLERANCE: usize = 10;

/// Words added to the slack per failed alignment, on top of the utterance length.
pub const SLACK_GROWTH_BASE: usize = 30;

/// Worker threads used by the threaded window search.
pub const DEFAULT_SEARCH_WORKERS: usize = 4;
