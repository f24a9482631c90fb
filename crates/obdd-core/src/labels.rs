//! Deterministic variable-label allocation for new decision nodes.
//!
//! The sequence starts at `p` and walks the alphabet with wrap-around
//! (`p..z`, then `a..o`), after which numbered labels `p1, p2, ...` continue
//! indefinitely.

/// Letters in allocation order: `p` through `z`, then `a` through `o`.
const LETTERS: [char; 26] = [
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
];

/// Label at a position of the allocation sequence.
pub fn label_at(index: usize) -> String {
    match LETTERS.get(index) {
        Some(letter) => letter.to_string(),
        None => format!("p{}", index - LETTERS.len() + 1),
    }
}

/// Monotonic label counter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LabelAllocator {
    next: usize,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the next candidate in the sequence.
    pub fn position(&self) -> usize {
        self.next
    }

    /// Move the counter, e.g. after importing a diagram.
    pub fn set_position(&mut self, next: usize) {
        self.next = next;
    }

    /// Restart the sequence from `p`.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// The label `allocate` would return, without consuming it.
    pub fn peek(&self, in_use: impl Fn(&str) -> bool) -> String {
        let mut index = self.next;
        loop {
            let label = label_at(index);
            if !in_use(&label) {
                return label;
            }
            index += 1;
        }
    }

    /// Consume and return the next label not attached to a live node.
    pub fn allocate(&mut self, in_use: impl Fn(&str) -> bool) -> String {
        loop {
            let label = label_at(self.next);
            self.next += 1;
            if !in_use(&label) {
                return label;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequence_starts_at_p_and_wraps() {
        let mut labels = LabelAllocator::new();
        let first: Vec<String> = (0..13).map(|_| labels.allocate(|_| false)).collect();
        assert_eq!(
            first,
            vec!["p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "a", "b"]
        );
    }

    #[test]
    fn test_numbered_labels_after_exhaustion() {
        assert_eq!(label_at(25), "o");
        assert_eq!(label_at(26), "p1");
        assert_eq!(label_at(28), "p3");
    }

    #[test]
    fn test_labels_pairwise_distinct() {
        let mut labels = LabelAllocator::new();
        let seen: HashSet<String> = (0..200).map(|_| labels.allocate(|_| false)).collect();
        assert_eq!(seen.len(), 200);
    }

    #[test]
    fn test_skips_labels_in_use() {
        let mut labels = LabelAllocator::new();
        let taken = ["p", "q"];
        assert_eq!(labels.peek(|l| taken.contains(&l)), "r");
        assert_eq!(labels.allocate(|l| taken.contains(&l)), "r");
        assert_eq!(labels.allocate(|l| taken.contains(&l)), "s");
    }

    #[test]
    fn test_reset_restarts_sequence() {
        let mut labels = LabelAllocator::new();
        labels.allocate(|_| false);
        labels.allocate(|_| false);
        labels.reset();
        assert_eq!(labels.allocate(|_| false), "p");
    }
}
