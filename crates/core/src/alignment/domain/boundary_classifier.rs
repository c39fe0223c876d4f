use super::sentence_alignment::SentenceAlignment;

/// Classifies each alignment's boundaries against its neighbors and the
/// document edges, then derives the final-quality flag.
///
/// A boundary is exact when it touches the document edge or abuts the
/// neighboring alignment's boundary with no gap or overlap. Idempotent:
/// classifying twice yields identical flags.
pub struct BoundaryClassifier;

impl BoundaryClassifier {
    pub fn classify(records: &mut [SentenceAlignment], document_len: usize) {
        let count = records.len();
        for index in 0..count {
            let left_exact = records[index].start == 0
                || (index > 0 && records[index].start == records[index - 1].end);
            let right_exact = records[index].end == document_len
                || (index + 1 < count && records[index].end == records[index + 1].start);

            let record = &mut records[index];
            record.left_exact = left_exact;
            record.right_exact = right_exact;
            record.is_first = index == 0;
            record.is_last = index + 1 == count;
            record.is_final_quality = (left_exact || record.is_first)
                && (right_exact || record.is_last)
                && !record.above_threshold;
        }
    }
}
