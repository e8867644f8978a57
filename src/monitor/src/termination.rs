use guesswatch_common::job::FileType;

/// Decides when the guesser has produced enough and must be stopped.
#[derive(Debug, Clone, Copy)]
pub struct TerminationGuard {
    ceiling: Option<u64>,
    mode: FileType,
}

impl TerminationGuard {
    pub fn new(ceiling: Option<u64>, mode: FileType) -> Self {
        Self { ceiling, mode }
    }

    pub fn is_bounded(&self) -> bool {
        self.ceiling.is_some()
    }

    /// Plaintext candidates are counted one by one, so the run stops on the
    /// exact candidate reaching the ceiling. Status lines only advance in
    /// coarse steps and may jump past it.
    pub fn should_terminate(&self, observed: u64) -> bool {
        match (self.ceiling, self.mode) {
            (None, _) => false,
            (Some(ceiling), FileType::Plaintext) => observed == ceiling,
            (Some(ceiling), FileType::HashValues) => observed >= ceiling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FileType::Plaintext, 0)]
    #[case(FileType::Plaintext, u64::MAX)]
    #[case(FileType::HashValues, u64::MAX)]
    fn test_unbounded_never_terminates(#[case] mode: FileType, #[case] observed: u64) {
        let guard = TerminationGuard::new(None, mode);
        assert!(!guard.is_bounded());
        assert!(!guard.should_terminate(observed));
    }

    #[rstest]
    #[case(999, false)]
    #[case(1000, true)]
    #[case(1001, false)]
    fn test_plaintext_requires_exact_match(#[case] observed: u64, #[case] expected: bool) {
        let guard = TerminationGuard::new(Some(1000), FileType::Plaintext);
        assert_eq!(guard.should_terminate(observed), expected);
    }

    #[rstest]
    #[case(0, false)]
    #[case(4000, false)]
    #[case(5000, true)]
    #[case(9000, true)]
    fn test_hash_mode_terminates_at_or_above(#[case] observed: u64, #[case] expected: bool) {
        let guard = TerminationGuard::new(Some(5000), FileType::HashValues);
        assert_eq!(guard.should_terminate(observed), expected);
    }
}
