use crate::distance::domain::sentence_distance::SentenceDistance;

/// Character-level edit distance between the separator-free concatenations
/// of two word sequences, normalized by the longer string length.
///
/// Comparing concatenated characters instead of whole words makes the score
/// robust against ASR word-boundary mistakes ("a lot" vs "alot").
pub struct LevenshteinDistance;

impl LevenshteinDistance {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LevenshteinDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceDistance for LevenshteinDistance {
    fn distance(&self, a: &[String], b: &[String]) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 1.0;
        }

        let left: Vec<char> = a.concat().chars().collect();
        let right: Vec<char> = b.concat().chars().collect();
        let longest = left.len().max(right.len());
        let edits = levenshtein_chars(&left, &right);
        edits as f64 / longest as f64
    }
}

/// Classic unit-cost Levenshtein with two-row DP, O(min(m, n)) memory.
fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let m = short.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn seq(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identity_is_zero() {
        let d = LevenshteinDistance::new();
        let s = seq(&["the", "quick", "brown"]);
        assert_relative_eq!(d.distance(&s, &s), 0.0);
    }

    #[test]
    fn test_empty_side_is_maximal() {
        let d = LevenshteinDistance::new();
        let s = seq(&["anything"]);
        assert_relative_eq!(d.distance(&[], &s), 1.0);
        assert_relative_eq!(d.distance(&s, &[]), 1.0);
        assert_relative_eq!(d.distance(&[], &[]), 1.0);
    }

    #[test]
    fn test_word_boundary_mismatch_is_free() {
        // Concatenation erases the boundary difference entirely.
        let d = LevenshteinDistance::new();
        assert_relative_eq!(d.distance(&seq(&["a", "lot"]), &seq(&["alot"])), 0.0);
    }

    #[test]
    fn test_single_typo() {
        // "tehquickbrown" vs "thequickbrown": one transposition = two edits
        // over 13 chars.
        let d = LevenshteinDistance::new();
        let got = d.distance(&seq(&["teh", "quick", "brown"]), &seq(&["the", "quick", "brown"]));
        assert_relative_eq!(got, 2.0 / 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_typos() {
        // Two transpositions: four edits over 13 chars.
        let d = LevenshteinDistance::new();
        let got = d.distance(&seq(&["teh", "quikc", "brown"]), &seq(&["the", "quick", "brown"]));
        assert_relative_eq!(got, 4.0 / 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_total_mismatch_near_one() {
        let d = LevenshteinDistance::new();
        let got = d.distance(&seq(&["zzzz"]), &seq(&["thequick"]));
        assert!(got > 0.8);
        assert!(got <= 1.0);
    }

    #[rstest]
    #[case(&[], &[], 0)]
    #[case(&['a'], &[], 1)]
    #[case(&[], &['a', 'b'], 2)]
    #[case(&['a', 'b', 'c'], &['a', 'b', 'c'], 0)]
    #[case(&['k', 'i', 't', 't', 'e', 'n'], &['s', 'i', 't', 't', 'i', 'n', 'g'], 3)]
    #[case(&['f', 'l', 'a', 'w'], &['l', 'a', 'w', 'n'], 2)]
    fn test_levenshtein_chars(#[case] a: &[char], #[case] b: &[char], #[case] expected: usize) {
        assert_eq!(levenshtein_chars(a, b), expected);
        assert_eq!(levenshtein_chars(b, a), expected);
    }

    #[test]
    fn test_deterministic() {
        let d = LevenshteinDistance::new();
        let a = seq(&["some", "longer", "utterance", "text"]);
        let b = seq(&["some", "longer", "utternace", "test"]);
        let first = d.distance(&a, &b);
        for _ in 0..10 {
            assert_relative_eq!(d.distance(&a, &b), first);
        }
    }
}
