//! Dictionary parsing and prefix indexes
//!
//! A `Dictionary` holds the validated word list with each word's 1-based rank.
//! The `WordIndex` implementations answer incremental prefix queries over it.

mod table;
mod trie;

pub use table::TableIndex;
pub use trie::TrieIndex;

use crate::core::{FormatError, MAX_PATH_LEN, MIN_WORD_LEN, is_uppercase_word};
use rustc_hash::FxHashMap;

/// 1-based line position of a word in the source list
pub type Rank = u32;

/// An index over dictionary prefixes, queried one letter at a time
///
/// A cursor stands for the prefix read so far. `step` returns `None` as soon as
/// no dictionary word starts with the extended prefix, which lets scans stop early.
pub trait WordIndex: Sync {
    /// Opaque position in the index
    type Cursor: Copy;

    /// Cursor for the empty prefix
    fn root(&self) -> Self::Cursor;

    /// Extend the prefix by one uppercase letter
    fn step(&self, cursor: Self::Cursor, letter: u8) -> Option<Self::Cursor>;

    /// Rank of the word ending exactly at this cursor, if the prefix is a word
    fn rank(&self, cursor: Self::Cursor) -> Option<Rank>;

    /// Look up a whole word
    fn lookup(&self, word: &str) -> Option<Rank> {
        let mut cursor = self.root();
        for letter in word.bytes() {
            cursor = self.step(cursor, letter)?;
        }
        self.rank(cursor)
    }
}

/// Validated word list
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    ranks: FxHashMap<String, Rank>,
}

impl Dictionary {
    /// Parse dictionary lines, one word per line
    ///
    /// Each word's rank is its 1-based line number. Surrounding whitespace is
    /// trimmed. If a word appears more than once, its first rank is kept.
    ///
    /// # Errors
    /// Fails on the first line that is not 2-5 uppercase ASCII letters
    /// (including blank lines, since ranks are line numbers).
    ///
    /// # Examples
    /// ```
    /// use grid_words::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::parse(["CAT", "CATS", "QUIZ"]).unwrap();
    /// assert_eq!(dict.rank_of("CATS"), Some(2));
    /// assert_eq!(dict.rank_of("DOG"), None);
    ///
    /// assert!(Dictionary::parse(["CAT", "cat"]).is_err());
    /// ```
    pub fn parse<I, S>(lines: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut ranks = FxHashMap::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            let word = line.as_ref().trim();

            // Characters first: byte length is only meaningful for ASCII
            if !is_uppercase_word(word) {
                return Err(FormatError::WordCharacters {
                    line: line_no,
                    text: word.to_string(),
                });
            }
            if !(MIN_WORD_LEN..=MAX_PATH_LEN).contains(&word.len()) {
                return Err(FormatError::WordLength {
                    line: line_no,
                    text: word.to_string(),
                });
            }

            ranks.entry(word.to_string()).or_insert(line_no as Rank);
            words.push(word.to_string());
        }

        Ok(Self { words, ranks })
    }

    /// Number of lines in the source list
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn unique_len(&self) -> usize {
        self.ranks.len()
    }

    /// Rank of a whole word
    #[must_use]
    pub fn rank_of(&self, word: &str) -> Option<Rank> {
        self.ranks.get(word).copied()
    }

    /// Word at a given rank
    #[must_use]
    pub fn word_at(&self, rank: Rank) -> Option<&str> {
        let idx = (rank as usize).checked_sub(1)?;
        self.words.get(idx).map(String::as_str)
    }

    /// Distinct words with their first rank, in list order
    pub fn entries(&self) -> impl Iterator<Item = (&str, Rank)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(idx, word)| (word.as_str(), idx as Rank + 1))
            .filter(|(word, rank)| self.ranks.get(*word) == Some(rank))
    }
}

/// Available index representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexKind {
    /// 26-way prefix tree (default)
    #[default]
    Trie,
    /// Direct-addressed base-27 table
    Table,
}

impl IndexKind {
    /// Create index kind from name string
    ///
    /// Supported names: "trie", "table" (alias "hash").
    /// Defaults to trie if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "table" | "hash" => Self::Table,
            _ => Self::Trie,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trie => "trie",
            Self::Table => "table",
        }
    }
}

/// Enum wrapper over the index representations
///
/// Allows runtime selection of the index while keeping static dispatch in the matcher.
#[derive(Debug, Clone)]
pub enum DictionaryIndex {
    Trie(TrieIndex),
    Table(TableIndex),
}

impl DictionaryIndex {
    /// Build the selected index over a dictionary
    #[must_use]
    pub fn build(kind: IndexKind, dictionary: &Dictionary) -> Self {
        match kind {
            IndexKind::Trie => Self::Trie(TrieIndex::from_dictionary(dictionary)),
            IndexKind::Table => Self::Table(TableIndex::from_dictionary(dictionary)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> IndexKind {
        match self {
            Self::Trie(_) => IndexKind::Trie,
            Self::Table(_) => IndexKind::Table,
        }
    }
}

impl WordIndex for DictionaryIndex {
    type Cursor = u32;

    #[inline]
    fn root(&self) -> u32 {
        match self {
            Self::Trie(index) => index.root(),
            Self::Table(index) => index.root(),
        }
    }

    #[inline]
    fn step(&self, cursor: u32, letter: u8) -> Option<u32> {
        match self {
            Self::Trie(index) => index.step(cursor, letter),
            Self::Table(index) => index.step(cursor, letter),
        }
    }

    #[inline]
    fn rank(&self, cursor: u32) -> Option<Rank> {
        match self {
            Self::Trie(index) => index.rank(cursor),
            Self::Table(index) => index.rank(cursor),
        }
    }
}

/// Map an uppercase letter to 0-25
#[inline]
pub(crate) fn letter_slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| usize::from(letter - b'A'))
}
