/// One utterance aligned to a span of the reference document.
///
/// `start`/`end` are document-absolute word indices, `0 <= start <= end <= N`.
/// The boundary fields (`left_exact` onward) are set once by the boundary
/// classifier after the full pass and never change again.
#[derive(Clone, Debug)]
pub struct SentenceAlignment {
    pub utterance_id: String,
    /// The ASR-recognized text, space-joined normalized words.
    pub asr_text: String,
    /// The best-matching reference span, space-joined normalized words.
    pub aligned_text: String,
    pub start: usize,
    pub end: usize,
    /// Normalized dissimilarity in `[0, 1]`; `0` is an exact match.
    pub distance: f64,
    /// Low-confidence flag: the best span still exceeded the distance
    /// threshold. The record is kept, not discarded.
    pub above_threshold: bool,
    pub left_exact: bool,
    pub right_exact: bool,
    pub is_first: bool,
    pub is_last: bool,
    /// Usable without review: exact (or outermost) on both sides and below
    /// the distance threshold.
    pub is_final_quality: bool,
}

impl SentenceAlignment {
    pub fn new(
        utterance_id: impl Into<String>,
        asr_text: impl Into<String>,
        aligned_text: impl Into<String>,
        start: usize,
        end: usize,
        distance: f64,
    ) -> Self {
        Self {
            utterance_id: utterance_id.into(),
            asr_text: asr_text.into(),
            aligned_text: aligned_text.into(),
            start,
            end,
            distance,
            above_threshold: false,
            left_exact: false,
            right_exact: false,
            is_first: false,
            is_last: false,
            is_final_quality: false,
        }
    }
}
