//! Letter-inventory operations for agents.
//!
//! The inventory record itself lives in `lexigraph-types`; this module holds
//! the rules the protocol applies to it: which letters are still needed for
//! a target, and which letters a completed word consumes.

use std::collections::BTreeSet;

use lexigraph_types::LetterInventory;

/// Sorted distinct characters of `target` that are absent from the
/// inventory's available union.
///
/// Presence semantics: a target needing two `p`s is satisfied by one.
pub fn needed_letters(target: &str, inventory: &LetterInventory) -> Vec<char> {
    target
        .chars()
        .filter(|c| !inventory.contains(*c))
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

/// Spend the externally acquired letters used by a completed `word`.
///
/// Each character of the word removes at most one matching letter, taken
/// from `stolen` if present there, otherwise from `received`. Initial letters
/// are never removed. Returns how many letters were consumed.
pub fn consume_word(inventory: &mut LetterInventory, word: &str) -> usize {
    let mut consumed: usize = 0;
    for letter in word.chars() {
        if remove_one(&mut inventory.stolen, letter) || remove_one(&mut inventory.received, letter)
        {
            consumed = consumed.saturating_add(1);
        }
    }
    consumed
}

/// Remove the first occurrence of `letter`, reporting whether one was found.
fn remove_one(letters: &mut Vec<char>, letter: char) -> bool {
    letters
        .iter()
        .position(|c| *c == letter)
        .map(|idx| letters.remove(idx))
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(initial: &str, stolen: &str, received: &str) -> LetterInventory {
        LetterInventory {
            initial: initial.chars().collect(),
            stolen: stolen.chars().collect(),
            received: received.chars().collect(),
        }
    }

    #[test]
    fn needed_is_sorted_and_distinct() {
        let inv = inventory("a", "", "");
        assert_eq!(needed_letters("apple", &inv), vec!['e', 'l', 'p']);
    }

    #[test]
    fn needed_counts_every_partition() {
        let inv = inventory("ap", "l", "e");
        assert!(needed_letters("apple", &inv).is_empty());
    }

    #[test]
    fn consume_prefers_stolen_over_received() {
        let mut inv = inventory("a", "pl", "pe");
        let consumed = consume_word(&mut inv, "apple");
        // 'a' is initial, so it stays; p, p, l, e each consume one letter.
        assert_eq!(consumed, 4);
        assert_eq!(inv.initial, vec!['a']);
        assert!(inv.stolen.is_empty());
        assert!(inv.received.is_empty());
    }

    #[test]
    fn consume_removes_one_letter_per_character() {
        let mut inv = inventory("", "ppp", "p");
        consume_word(&mut inv, "apple");
        assert_eq!(inv.stolen, vec!['p']);
        assert_eq!(inv.received, vec!['p']);
    }

    #[test]
    fn consume_never_touches_initial() {
        let mut inv = inventory("apple", "", "");
        assert_eq!(consume_word(&mut inv, "apple"), 0);
        assert_eq!(inv.initial, vec!['a', 'p', 'p', 'l', 'e']);
    }
}
