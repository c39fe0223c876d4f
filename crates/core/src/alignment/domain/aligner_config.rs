use crate::shared::error::AlignError;

/// Driver configuration derived from the declared section layout of the
/// reference text.
///
/// Callers list the section numbers (e.g. book chapters) that were mapped
/// into the reference document, in reading order. One relocation of the
/// search range is always allowed for the start of the text; every
/// non-adjacent section boundary (a jump in the numbering) grants one more,
/// since the utterance stream is expected to skip there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignerConfig {
    relocation_budget: usize,
}

impl AlignerConfig {
    /// Fails immediately if `sections` is not strictly increasing.
    pub fn from_sections(sections: &[u32]) -> Result<Self, AlignError> {
        let mut budget = 1;
        for pair in sections.windows(2) {
            if pair[1] <= pair[0] {
                return Err(AlignError::NonIncreasingSections {
                    previous: pair[0],
                    current: pair[1],
                });
            }
            if pair[1] > pair[0] + 1 {
                budget += 1;
            }
        }
        Ok(Self {
            relocation_budget: budget,
        })
    }

    /// Explicit budget, bypassing section bookkeeping. Mainly for tests and
    /// callers that already know how many relocations to allow.
    pub fn with_relocation_budget(relocation_budget: usize) -> Self {
        Self { relocation_budget }
    }

    pub fn relocation_budget(&self) -> usize {
        self.relocation_budget
    }
}
