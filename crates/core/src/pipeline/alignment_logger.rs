use std::time::Instant;

use crate::alignment::domain::gap_reporter::AlignmentGap;
use crate::alignment::domain::sentence_alignment::SentenceAlignment;

/// Cross-cutting observer for alignment-run events.
///
/// Decouples the driver and the use case from specific output mechanisms
/// so callers can watch a run without changing the search code.
pub trait AlignmentLogger: Send {
    /// Report per-utterance progress.
    fn progress(&mut self, current: usize, total: usize);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// An utterance whose best span still exceeded the distance threshold.
    /// `search_range_text` is the reference text the window covered.
    fn above_threshold(&mut self, record: &SentenceAlignment, search_range_text: &str);

    /// Reference words not covered by any alignment.
    fn gap(&mut self, gap: &AlignmentGap);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by tests and by callers
/// with their own reporting.
pub struct NullAlignmentLogger;

impl AlignmentLogger for NullAlignmentLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn info(&mut self, _message: &str) {}
    fn above_threshold(&mut self, _record: &SentenceAlignment, _search_range_text: &str) {}
    fn gap(&mut self, _gap: &AlignmentGap) {}
}

/// CLI-oriented logger that routes events through the `log` facade and
/// keeps counters for an end-of-run summary.
///
/// Progress output is throttled to every `throttle_utterances` utterances
/// to avoid drowning the log on long books.
pub struct StdoutAlignmentLogger {
    throttle_utterances: usize,
    start_time: Instant,
    total_utterances: usize,
    above_threshold_count: usize,
    gap_count: usize,
    missing_word_count: usize,
}

impl StdoutAlignmentLogger {
    pub fn new(throttle_utterances: usize) -> Self {
        Self {
            throttle_utterances: throttle_utterances.max(1),
            start_time: Instant::now(),
            total_utterances: 0,
            above_threshold_count: 0,
            gap_count: 0,
            missing_word_count: 0,
        }
    }

    /// Returns the formatted summary string, or `None` if nothing was processed.
    pub fn summary_string(&self) -> Option<String> {
        if self.total_utterances == 0 {
            return None;
        }
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let mut lines = vec![format!(
            "Alignment summary ({} utterances, {elapsed:.1}s total):",
            self.total_utterances
        )];
        lines.push(format!(
            "  above threshold: {} ({:.1}%)",
            self.above_threshold_count,
            self.above_threshold_count as f64 / self.total_utterances as f64 * 100.0
        ));
        lines.push(format!(
            "  gaps: {} ({} missing words)",
            self.gap_count, self.missing_word_count
        ));
        Some(lines.join("\n"))
    }

    pub fn above_threshold_count(&self) -> usize {
        self.above_threshold_count
    }

    pub fn gap_count(&self) -> usize {
        self.gap_count
    }
}

impl Default for StdoutAlignmentLogger {
    fn default() -> Self {
        Self::new(50)
    }
}

impl AlignmentLogger for StdoutAlignmentLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.total_utterances = total;
        if total > 0 && (current % self.throttle_utterances == 0 || current == total) {
            let pct = current as f64 / total as f64 * 100.0;
            log::info!("Aligning: {current}/{total} utterances ({pct:.1}%)");
        }
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn above_threshold(&mut self, record: &SentenceAlignment, search_range_text: &str) {
        self.above_threshold_count += 1;
        log::warn!(
            "Above distance threshold: {} ({:.3})\n  ASR transcript: {}\n  Best alignment: {}\n  Search range: {}",
            record.utterance_id,
            record.distance,
            record.asr_text,
            record.aligned_text,
            search_range_text,
        );
    }

    fn gap(&mut self, gap: &AlignmentGap) {
        self.gap_count += 1;
        self.missing_word_count += gap.end.saturating_sub(gap.start);
        log::info!(
            "Missing words after {} [{}, {}): {}",
            gap.after_utterance_id,
            gap.start,
            gap.end,
            gap.missing_text,
        );
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n{text}");
        }
    }
}
