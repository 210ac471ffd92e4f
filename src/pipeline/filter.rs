//! Length filtering

use tracing::info;

use crate::mutators::text::char_len;
use crate::mutators::CandidateSet;

/// Inclusive length bounds, measured in characters. A missing bound does
/// not restrict that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthFilter {
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
}

impl LengthFilter {
    pub fn new(min_len: Option<usize>, max_len: Option<usize>) -> Self {
        Self { min_len, max_len }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min_len.is_none() && self.max_len.is_none()
    }

    pub fn accepts(&self, word: &str) -> bool {
        let len = char_len(word);
        self.min_len.is_none_or(|min| len >= min) && self.max_len.is_none_or(|max| len <= max)
    }

    /// Keep the words within bounds
    pub fn apply(&self, words: CandidateSet) -> CandidateSet {
        if self.is_unbounded() {
            return words;
        }

        info!(
            "Applying filters: Min Length={}, Max Length={}",
            display_bound(self.min_len),
            display_bound(self.max_len)
        );
        let original_count = words.len();
        let filtered: CandidateSet = words.into_iter().filter(|w| self.accepts(w)).collect();
        info!(
            "Total words after filtering: {} (Removed: {})",
            filtered.len(),
            original_count - filtered.len()
        );
        filtered
    }
}

fn display_bound(bound: Option<usize>) -> String {
    bound.map_or_else(|| "none".to_string(), |b| b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = LengthFilter::new(Some(3), Some(5));
        let out = filter.apply(set(&["ab", "abc", "abcd", "abcde", "abcdef"]));
        assert_eq!(out, set(&["abc", "abcd", "abcde"]));
    }

    #[test]
    fn test_open_bounds() {
        let words = set(&["a", "abcdefghij"]);
        assert_eq!(LengthFilter::new(None, Some(1)).apply(words.clone()), set(&["a"]));
        assert_eq!(LengthFilter::new(Some(2), None).apply(words.clone()), set(&["abcdefghij"]));
        assert_eq!(LengthFilter::default().apply(words.clone()), words);
    }

    #[test]
    fn test_idempotent() {
        let filter = LengthFilter::new(Some(2), Some(4));
        let once = filter.apply(set(&["a", "ab", "abc", "abcde", "ñññ"]));
        let twice = filter.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_length_in_characters() {
        let filter = LengthFilter::new(Some(4), Some(4));
        assert!(filter.accepts("ñaño"));
        assert!(!filter.accepts("abc"));
    }
}
