/// Normalized dissimilarity between two word sequences.
///
/// Returns a value in `[0, 1]`: `0` for an exact match, `1` for
/// non-alignable input (either side empty) or near-total mismatch.
/// Implementations must be deterministic and side-effect free; they are
/// called concurrently from the window search workers.
pub trait SentenceDistance: Send + Sync {
    fn distance(&self, a: &[String], b: &[String]) -> f64;
}
