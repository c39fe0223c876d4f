use crate::alignment::domain::aligner::Aligner;
use crate::alignment::domain::aligner_config::AlignerConfig;
use crate::alignment::domain::boundary_classifier::BoundaryClassifier;
use crate::alignment::domain::gap_reporter::{missing_words, AlignmentGap};
use crate::alignment::domain::sentence_alignment::SentenceAlignment;
use crate::pipeline::alignment_logger::AlignmentLogger;
use crate::search::domain::window_search::WindowSearch;
use crate::shared::error::AlignError;
use crate::text::domain::tokenizer::Tokenizer;

/// One raw ASR transcript: an opaque id plus the recognized text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    pub id: String,
    pub text: String,
}

/// Outcome of a completed alignment run, split by quality.
///
/// `final_records` are usable without review: exact (or outermost)
/// boundaries on both sides and below the distance threshold. Everything
/// else lands in `review_records` for inspection.
#[derive(Debug)]
pub struct AlignmentReport {
    pub final_records: Vec<SentenceAlignment>,
    pub review_records: Vec<SentenceAlignment>,
    pub gaps: Vec<AlignmentGap>,
    /// Share of records that are not final quality, in `[0, 1]`.
    pub review_ratio: f64,
}

/// Orchestrates a full alignment run: tokenize, drive the sequential
/// search, classify boundaries, extract gaps, and split the records by
/// quality for the caller to persist separately.
pub struct AlignTextUseCase {
    tokenizer: Box<dyn Tokenizer>,
    aligner: Aligner,
    logger: Box<dyn AlignmentLogger>,
}

impl AlignTextUseCase {
    pub fn new(
        tokenizer: Box<dyn Tokenizer>,
        search: Box<dyn WindowSearch>,
        config: AlignerConfig,
        logger: Box<dyn AlignmentLogger>,
    ) -> Self {
        Self {
            tokenizer,
            aligner: Aligner::new(search, config),
            logger,
        }
    }

    pub fn execute(
        &mut self,
        reference_text: &str,
        transcripts: &[Transcript],
    ) -> Result<AlignmentReport, AlignError> {
        let document = self.tokenizer.tokenize(reference_text, "reference");
        let utterances: Vec<_> = transcripts
            .iter()
            .map(|t| self.tokenizer.tokenize(&t.text, &t.id))
            .collect();

        let mut records = self
            .aligner
            .align(&document, &utterances, &mut *self.logger)?;
        BoundaryClassifier::classify(&mut records, document.words_count());

        let gaps = missing_words(&records, &document);
        for gap in &gaps {
            self.logger.gap(gap);
        }

        let total = records.len();
        let (final_records, review_records): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|r| r.is_final_quality);

        let review_ratio = if total == 0 {
            0.0
        } else {
            review_records.len() as f64 / total as f64
        };
        self.logger.info(&format!(
            "{} of {} alignments need review ({:.1}%)",
            review_records.len(),
            total,
            review_ratio * 100.0
        ));
        self.logger.summary();

        Ok(AlignmentReport {
            final_records,
            review_records,
            gaps,
            review_ratio,
        })
    }
}
