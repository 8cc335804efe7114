//! Input format errors
//!
//! Raised while parsing dictionary words and game grids. A single bad line fails the whole build.

use std::fmt;

/// Error type for malformed dictionary or grid lines
///
/// Every variant carries the 1-based line number and the offending text so the
/// caller can surface exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Dictionary word outside the 2-5 letter range
    WordLength { line: usize, text: String },
    /// Dictionary word with something other than `A`-`Z`
    WordCharacters { line: usize, text: String },
    /// Grid line that is not exactly 25 characters
    GridLength { line: usize, text: String },
    /// Grid line with something other than `A`-`Z`
    GridCharacters { line: usize, text: String },
}

impl FormatError {
    /// 1-based line number of the rejected input
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::WordLength { line, .. }
            | Self::WordCharacters { line, .. }
            | Self::GridLength { line, .. }
            | Self::GridCharacters { line, .. } => *line,
        }
    }

    /// The rejected input text
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::WordLength { text, .. }
            | Self::WordCharacters { text, .. }
            | Self::GridLength { text, .. }
            | Self::GridCharacters { text, .. } => text,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordLength { line, text } => write!(
                f,
                "line {line}: word {text:?} must be 2-5 letters, got {}",
                text.len()
            ),
            Self::WordCharacters { line, text } => write!(
                f,
                "line {line}: word {text:?} must contain only uppercase letters A-Z"
            ),
            Self::GridLength { line, text } => write!(
                f,
                "line {line}: grid {text:?} must be exactly 25 letters, got {}",
                text.len()
            ),
            Self::GridCharacters { line, text } => write!(
                f,
                "line {line}: grid {text:?} must contain only uppercase letters A-Z"
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// True if every byte is an uppercase ASCII letter
#[inline]
pub(crate) fn is_uppercase_word(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_uppercase())
}
