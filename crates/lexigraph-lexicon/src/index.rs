//! Feasible-word filtering and closest-target selection.
//!
//! Both queries use character *presence*: a word needing two `e`s is
//! feasible when the pool holds a single `e`. Count-aware accounting would
//! change which words are ever reachable, so it is not done here.

use std::collections::BTreeSet;

/// Return, in corpus order, every word whose distinct characters all occur
/// in `available`.
pub fn feasible(corpus: &[String], available: &[char]) -> Vec<String> {
    let pool: BTreeSet<char> = available.iter().copied().collect();
    corpus
        .iter()
        .filter(|word| word.chars().all(|c| pool.contains(&c)))
        .cloned()
        .collect()
}

/// Score how far `available` is from `word`: the number of available
/// letters (counted with repetition) that do not occur in the word.
///
/// Lower is closer. This is not an edit distance; repeated or surplus
/// available letters skew it.
pub fn target_score(word: &str, available: &[char]) -> usize {
    let overlap = available.iter().filter(|c| word.contains(**c)).count();
    available.len().saturating_sub(overlap)
}

/// Pick the candidate with the lowest [`target_score`] and remove it from
/// `candidates`.
///
/// Ties go to the earliest candidate. Returns `None` once the candidate
/// list is exhausted.
pub fn closest_target(candidates: &mut Vec<String>, available: &[char]) -> Option<String> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, word) in candidates.iter().enumerate() {
        let score = target_score(word, available);
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((idx, score));
        }
    }
    let (idx, _) = best?;
    Some(candidates.remove(idx))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn feasible_keeps_corpus_order() {
        let corpus = words(&["plea", "apple", "zebra", "leap"]);
        let available = ['a', 'p', 'l', 'e'];
        assert_eq!(feasible(&corpus, &available), words(&["plea", "apple", "leap"]));
    }

    #[test]
    fn feasible_uses_presence_not_count() {
        // One 'p' in the pool is enough for the two in "apple".
        let corpus = words(&["apple"]);
        assert_eq!(feasible(&corpus, &['a', 'p', 'l', 'e']), words(&["apple"]));
    }

    #[test]
    fn feasible_excludes_words_with_missing_letters() {
        let corpus = words(&["apple", "zebra"]);
        let available = ['a', 'p', 'l', 'e', 'b', 'r'];
        assert_eq!(feasible(&corpus, &available), words(&["apple"]));
    }

    #[test]
    fn feasible_on_empty_pool_is_empty() {
        let corpus = words(&["apple"]);
        assert!(feasible(&corpus, &[]).is_empty());
    }

    #[test]
    fn target_score_counts_unmatched_available_letters() {
        assert_eq!(target_score("apple", &['a', 'p', 'x']), 1);
        assert_eq!(target_score("apple", &['x', 'y', 'z']), 3);
        // Repeats each count toward the overlap.
        assert_eq!(target_score("apple", &['p', 'p', 'p', 'p']), 0);
    }

    #[test]
    fn closest_target_picks_lowest_score_and_removes_it() {
        let mut candidates = words(&["zebra", "apple", "crane"]);
        let picked = closest_target(&mut candidates, &['a', 'p', 'l']);
        assert_eq!(picked.as_deref(), Some("apple"));
        assert_eq!(candidates, words(&["zebra", "crane"]));
    }

    #[test]
    fn closest_target_breaks_ties_by_first_occurrence() {
        let mut candidates = words(&["crane", "react", "trace"]);
        let picked = closest_target(&mut candidates, &['r', 'a']);
        assert_eq!(picked.as_deref(), Some("crane"));
    }

    #[test]
    fn closest_target_never_repeats() {
        let mut candidates = words(&["apple", "ample"]);
        let first = closest_target(&mut candidates, &['a']).unwrap();
        let second = closest_target(&mut candidates, &['a']).unwrap();
        assert_ne!(first, second);
        assert_eq!(closest_target(&mut candidates, &['a']), None);
    }
}
