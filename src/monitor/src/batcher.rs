use std::num::NonZeroUsize;

/// Fixed-capacity candidate buffer reused across batches.
///
/// Slots keep their `String` allocations between batches; only the first
/// `cursor` slots hold candidates of the current batch. Anything past the
/// cursor is left over from the previous batch and must never be handed out.
pub struct CandidateBatcher {
    slots: Vec<String>,
    capacity: NonZeroUsize,
    cursor: usize,
    total: u64,
}

impl CandidateBatcher {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.get()),
            capacity,
            cursor: 0,
            total: 0,
        }
    }

    /// Stores a candidate. Returns the complete batch once the buffer is full;
    /// the next append starts a new batch from the first slot.
    pub fn append(&mut self, candidate: &str) -> Option<&[String]> {
        match self.slots.get_mut(self.cursor) {
            Some(slot) => {
                slot.clear();
                slot.push_str(candidate);
            }
            None => self.slots.push(candidate.to_owned()),
        }
        self.cursor += 1;
        self.total += 1;

        if self.cursor == self.capacity.get() {
            self.cursor = 0;
            Some(&self.slots[..self.capacity.get()])
        } else {
            None
        }
    }

    /// Candidates written since the last full batch, or `None` if there are none.
    pub fn flush_partial(&mut self) -> Option<&[String]> {
        if self.cursor == 0 {
            return None;
        }
        let valid = self.cursor;
        self.cursor = 0;
        Some(&self.slots[..valid])
    }

    /// Candidates received over the whole run.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Candidates waiting in the current, not yet full, batch.
    pub fn pending(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn batcher(capacity: usize) -> CandidateBatcher {
        CandidateBatcher::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_full_batch_is_returned_in_order() {
        let mut batcher = batcher(3);
        assert!(batcher.append("a").is_none());
        assert!(batcher.append("b").is_none());
        let batch = batcher.append("c").unwrap().to_vec();
        assert_eq!(batch, vec!["a", "b", "c"]);
        assert_eq!(batcher.pending(), 0);
        assert_eq!(batcher.total(), 3);
    }

    #[test]
    fn test_partial_flush_drops_stale_slots() {
        let mut batcher = batcher(4);
        for candidate in ["1", "2", "3", "4"] {
            batcher.append(candidate);
        }
        batcher.append("5");
        batcher.append("6");

        let partial = batcher.flush_partial().unwrap().to_vec();
        assert_eq!(partial, vec!["5", "6"]);
        assert_eq!(batcher.total(), 6);
    }

    #[test]
    fn test_partial_flush_is_noop_when_empty() {
        let mut batcher = batcher(2);
        assert!(batcher.flush_partial().is_none());
        batcher.append("x");
        batcher.append("y");
        assert!(batcher.flush_partial().is_none());
    }

    #[test]
    fn test_partial_flush_does_not_repeat() {
        let mut batcher = batcher(5);
        batcher.append("only");
        assert_eq!(batcher.flush_partial().unwrap().len(), 1);
        assert!(batcher.flush_partial().is_none());
    }

    #[test]
    fn test_capacity_one_flushes_every_candidate() {
        let mut batcher = batcher(1);
        assert_eq!(batcher.append("a").unwrap(), ["a".to_string()]);
        assert_eq!(batcher.append("b").unwrap(), ["b".to_string()]);
        assert!(batcher.flush_partial().is_none());
    }

    #[test]
    fn test_slots_are_reused() {
        let mut batcher = batcher(2);
        batcher.append("first-long-candidate");
        batcher.append("second");
        batcher.append("x");
        let partial = batcher.flush_partial().unwrap();
        assert_eq!(partial, ["x".to_string()]);
        assert_eq!(batcher.slots.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_batches_reassemble_the_stream(
            capacity in 1usize..16,
            candidates in proptest::collection::vec("[a-z0-9]{0,8}", 0..100),
        ) {
            let mut batcher = batcher(capacity);
            let mut received: Vec<String> = Vec::new();
            let mut calls = 0usize;

            for candidate in &candidates {
                if let Some(batch) = batcher.append(candidate) {
                    prop_assert_eq!(batch.len(), capacity);
                    received.extend_from_slice(batch);
                    calls += 1;
                }
            }
            if let Some(batch) = batcher.flush_partial() {
                prop_assert!(!batch.is_empty());
                prop_assert!(batch.len() < capacity);
                received.extend_from_slice(batch);
                calls += 1;
            }

            prop_assert_eq!(calls, candidates.len().div_ceil(capacity));
            prop_assert_eq!(received, candidates.clone());
            prop_assert_eq!(batcher.total(), candidates.len() as u64);
        }
    }
}
