//! Direct-addressed prefix table
//!
//! Every prefix maps to a base-27 key: digit 0 is reserved so that `A` = 1 .. `Z` = 26,
//! which keeps keys of different lengths distinct. With words capped at five letters
//! the whole key space fits in 27^5 slots and no collision handling is needed.

use super::{Dictionary, Rank, WordIndex, letter_slot};
use crate::core::MAX_PATH_LEN;

/// Radix of the positional key
const RADIX: u32 = 27;

/// Number of slots: every key of up to `MAX_PATH_LEN` digits
const TABLE_SIZE: usize = RADIX.pow(MAX_PATH_LEN as u32) as usize;

const EMPTY: u32 = 0;
const PREFIX_ONLY: u32 = u32::MAX;

/// Prefix index backed by a flat 27^5 slot table
///
/// A slot holds `EMPTY`, `PREFIX_ONLY`, or the rank of the word with that key.
#[derive(Debug, Clone)]
pub struct TableIndex {
    slots: Box<[u32]>,
    words: usize,
}

impl TableIndex {
    /// Build the table from a parsed dictionary
    #[must_use]
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        let mut index = Self {
            slots: vec![EMPTY; TABLE_SIZE].into_boxed_slice(),
            words: 0,
        };
        for (word, rank) in dictionary.entries() {
            index.insert(word, rank);
        }
        index
    }

    fn insert(&mut self, word: &str, rank: Rank) {
        let mut key = 0u32;
        for letter in word.bytes() {
            let Some(next) = next_key(key, letter) else {
                return;
            };
            key = next;
            let slot = &mut self.slots[key as usize];
            if *slot == EMPTY {
                *slot = PREFIX_ONLY;
            }
        }

        let slot = &mut self.slots[key as usize];
        if *slot == PREFIX_ONLY {
            *slot = rank;
            self.words += 1;
        }
    }

    /// Key for a whole word, if it fits in the table
    #[must_use]
    pub fn key(word: &str) -> Option<u32> {
        word.bytes().try_fold(0u32, next_key)
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }
}

#[inline]
fn next_key(key: u32, letter: u8) -> Option<u32> {
    let digit = letter_slot(letter)? as u32 + 1;
    let next = key.checked_mul(RADIX)?.checked_add(digit)?;
    ((next as usize) < TABLE_SIZE).then_some(next)
}

impl WordIndex for TableIndex {
    type Cursor = u32;

    #[inline]
    fn root(&self) -> u32 {
        0
    }

    #[inline]
    fn step(&self, cursor: u32, letter: u8) -> Option<u32> {
        let next = next_key(cursor, letter)?;
        (self.slots[next as usize] != EMPTY).then_some(next)
    }

    #[inline]
    fn rank(&self, cursor: u32) -> Option<Rank> {
        match self.slots[cursor as usize] {
            EMPTY | PREFIX_ONLY => None,
            rank => Some(rank),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(words: &[&str]) -> TableIndex {
        TableIndex::from_dictionary(&Dictionary::parse(words).unwrap())
    }

    #[test]
    fn keys_are_base_27() {
        assert_eq!(TableIndex::key("A"), Some(1));
        assert_eq!(TableIndex::key("Z"), Some(26));
        assert_eq!(TableIndex::key("AA"), Some(28));
        assert_eq!(TableIndex::key("BA"), Some(2 * 27 + 1));
        assert_eq!(TableIndex::key("ZZZZZ"), Some(TABLE_SIZE as u32 - 1));
        assert_eq!(TableIndex::key("ZZZZZZ"), None);
        assert_eq!(TableIndex::key("a"), None);
    }

    #[test]
    fn prefixes_are_walkable_but_not_words() {
        let index = index(&["CATS"]);
        let c = index.step(index.root(), b'C').unwrap();
        let ca = index.step(c, b'A').unwrap();
        let cat = index.step(ca, b'T').unwrap();
        let cats = index.step(cat, b'S').unwrap();

        assert_eq!(index.rank(ca), None);
        assert_eq!(index.rank(cat), None);
        assert_eq!(index.rank(cats), Some(1));
        assert!(index.step(cats, b'S').is_none());
        assert!(index.step(c, b'O').is_none());
    }

    #[test]
    fn nested_words_each_keep_rank() {
        let index = index(&["CATS", "CAT"]);
        assert_eq!(index.lookup("CAT"), Some(2));
        assert_eq!(index.lookup("CATS"), Some(1));
        assert_eq!(index.word_count(), 2);
    }

    #[test]
    fn stepping_past_five_letters_stops() {
        let index = index(&["STARE"]);
        let mut cursor = index.root();
        for letter in "STARE".bytes() {
            cursor = index.step(cursor, letter).unwrap();
        }
        assert!(index.step(cursor, b'S').is_none());
    }

    #[test]
    fn empty_dictionary_has_no_prefixes() {
        let index = index(&[]);
        assert!(index.step(index.root(), b'A').is_none());
        assert_eq!(index.word_count(), 0);
    }
}
