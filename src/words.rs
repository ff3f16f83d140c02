//! The rotating word list.
//!
//! Words come from a single comma-separated attribute value. The first word
//! is what the page already renders, so it keeps its slot; everything after
//! it is shuffled once at construction so each page load shows a different
//! order.

use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered, immutable list of words to cycle through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse an attribute value and shuffle all but the first word using the
    /// thread-local RNG.
    ///
    /// `None` (attribute absent) and blank values yield an empty list.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        Self::parse_with_rng(raw, &mut rand::rng())
    }

    /// Same as [`parse`](Self::parse) with an explicit RNG.
    pub fn parse_with_rng<R: Rng + ?Sized>(
        raw: Option<&str>,
        rng: &mut R,
    ) -> Self {
        let mut words = split_words(raw.unwrap_or_default());
        if let Some((_, rest)) = words.split_first_mut() {
            rest.shuffle(rng);
        }
        Self { words }
    }

    /// Build a list in the given order, without shuffling.
    #[must_use]
    pub fn from_ordered(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words (rotation is disabled).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// The word the page starts out showing.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    /// Index following `index`, wrapping to 0 after the last word.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if self.words.is_empty() {
            return None;
        }
        Some((index + 1) % self.words.len())
    }

    /// All words in rotation order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

fn split_words(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn sorted(words: &[String]) -> Vec<String> {
        let mut out = words.to_vec();
        out.sort();
        out
    }

    #[test]
    fn missing_or_blank_attribute_is_empty() {
        assert!(WordList::parse(None).is_empty());
        assert!(WordList::parse(Some("")).is_empty());
        assert!(WordList::parse(Some(" , ,, ")).is_empty());
    }

    #[test]
    fn tokens_are_trimmed_and_blanks_dropped() {
        let list = WordList::parse(Some(" Apple ,, Banana"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.first(), Some("Apple"));
        assert_eq!(list.get(1), Some("Banana"));
    }

    #[test]
    fn first_word_stays_and_rest_is_a_permutation() {
        let raw = "Alpha,Beta,Gamma,Delta,Epsilon";
        let original: Vec<String> =
            raw.split(',').map(str::to_owned).collect();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let list = WordList::parse_with_rng(Some(raw), &mut rng);
            assert_eq!(list.len(), original.len());
            assert_eq!(list.first(), Some("Alpha"));
            assert_eq!(sorted(&list.as_slice()[1..]), sorted(&original[1..]));
        }
    }

    #[test]
    fn shuffle_reaches_every_ordering_evenly() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        let trials = 6000;

        for _ in 0..trials {
            let list = WordList::parse_with_rng(Some("A,B,C,D"), &mut rng);
            *counts.entry(list.as_slice()[1..].to_vec()).or_default() += 1;
        }

        // 3! orderings of the tail, ~1000 each.
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..1200).contains(count), "skewed count {count}");
        }
    }

    #[test]
    fn next_index_wraps() {
        let list = WordList::from_ordered(vec![
            "a".to_owned(),
            "b".to_owned(),
            "c".to_owned(),
        ]);
        assert_eq!(list.next_index(0), Some(1));
        assert_eq!(list.next_index(1), Some(2));
        assert_eq!(list.next_index(2), Some(0));
    }

    #[test]
    fn single_word_always_wraps_to_zero() {
        let list = WordList::parse(Some("Solo"));
        assert_eq!(list.next_index(0), Some(0));
    }

    #[test]
    fn empty_list_has_no_next_index() {
        assert_eq!(WordList::default().next_index(0), None);
    }
}
