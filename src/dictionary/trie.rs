//! 26-way prefix tree
//!
//! Nodes live in one arena vector and refer to children by index. Node 0 is the
//! root, so a child index of 0 means "no child".

use super::{Dictionary, Rank, WordIndex, letter_slot};

const ALPHABET: usize = 26;
const NO_CHILD: u32 = 0;

#[derive(Debug, Clone)]
struct Node {
    children: [u32; ALPHABET],
    /// Rank of the word ending here, 0 if the prefix is not a word
    rank: Rank,
}

impl Node {
    const fn new() -> Self {
        Self {
            children: [NO_CHILD; ALPHABET],
            rank: 0,
        }
    }
}

/// Prefix index backed by an arena-allocated trie
#[derive(Debug, Clone)]
pub struct TrieIndex {
    nodes: Vec<Node>,
    words: usize,
}

impl TrieIndex {
    /// Build the trie from a parsed dictionary
    ///
    /// # Examples
    /// ```
    /// use grid_words::dictionary::{Dictionary, TrieIndex, WordIndex};
    ///
    /// let dict = Dictionary::parse(["CAT", "CATS"]).unwrap();
    /// let trie = TrieIndex::from_dictionary(&dict);
    ///
    /// assert_eq!(trie.lookup("CAT"), Some(1));
    /// assert_eq!(trie.lookup("CATS"), Some(2));
    /// assert_eq!(trie.lookup("CA"), None);
    /// ```
    #[must_use]
    pub fn from_dictionary(dictionary: &Dictionary) -> Self {
        let mut index = Self {
            nodes: vec![Node::new()],
            words: 0,
        };
        for (word, rank) in dictionary.entries() {
            index.insert(word, rank);
        }
        index
    }

    fn insert(&mut self, word: &str, rank: Rank) {
        let mut node = 0usize;
        for letter in word.bytes() {
            let Some(slot) = letter_slot(letter) else {
                return;
            };
            let child = self.nodes[node].children[slot];
            node = if child == NO_CHILD {
                let id = self.nodes.len();
                self.nodes.push(Node::new());
                self.nodes[node].children[slot] = id as u32;
                id
            } else {
                child as usize
            };
        }

        if self.nodes[node].rank == 0 {
            self.nodes[node].rank = rank;
            self.words += 1;
        }
    }

    /// Number of nodes including the root
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }
}

impl WordIndex for TrieIndex {
    type Cursor = u32;

    #[inline]
    fn root(&self) -> u32 {
        0
    }

    #[inline]
    fn step(&self, cursor: u32, letter: u8) -> Option<u32> {
        let slot = letter_slot(letter)?;
        match self.nodes[cursor as usize].children[slot] {
            NO_CHILD => None,
            child => Some(child),
        }
    }

    #[inline]
    fn rank(&self, cursor: u32) -> Option<Rank> {
        match self.nodes[cursor as usize].rank {
            0 => None,
            rank => Some(rank),
        }
    }
}
