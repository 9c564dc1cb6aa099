//! Secret word representation
//!
//! A `SecretWord` stores the lowercase text of a language name along with
//! the set of distinct letters that must be guessed to win.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// The word the player is trying to guess
///
/// Characters that are not ASCII letters (the `.` in `node.js`) cannot be
/// guessed and are always shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<Letter>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NoLetters(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::NoLetters(text) => write!(f, "Secret word '{text}' has no letters to guess"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a secret word from any text
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains no ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::{Letter, SecretWord};
    ///
    /// let word = SecretWord::new("Ruby").unwrap();
    /// assert_eq!(word.text(), "ruby");
    /// assert!(word.has_letter(Letter::new('u').unwrap()));
    ///
    /// assert!(SecretWord::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters: FxHashSet<Letter> = text.chars().filter_map(|c| Letter::new(c).ok()).collect();
        if letters.is_empty() {
            return Err(WordError::NoLetters(text));
        }

        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Characters in display order, one per word slot
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters that must be guessed to win
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &FxHashSet<Letter> {
        &self.letters
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
