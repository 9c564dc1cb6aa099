//! Guessable letters
//!
//! A `Letter` is one lowercase ASCII letter. The on-screen keyboard offers
//! exactly the 26 letters of `ALPHABET`.

use std::fmt;

/// The keyboard alphabet, in key order
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A single guessable letter (`a`..=`z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for characters that cannot be guessed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    NonAscii(char),
    NotALetter(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAscii(c) => write!(f, "'{c}' is not an ASCII letter"),
            Self::NotALetter(c) => write!(f, "'{c}' is not a letter"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a character, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `LetterError` for anything outside `a-z` / `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::Letter;
    ///
    /// let letter = Letter::new('R').unwrap();
    /// assert_eq!(letter.as_char(), 'r');
    ///
    /// assert!(Letter::new('.').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if !c.is_ascii() {
            return Err(LetterError::NonAscii(c));
        }
        if !c.is_ascii_alphabetic() {
            return Err(LetterError::NotALetter(c));
        }
        Ok(Self(c.to_ascii_lowercase() as u8))
    }

    /// Letter at position `index` of the alphabet (0 = `a`)
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 26 {
            Some(Self(b'a' + index as u8))
        } else {
            None
        }
    }

    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Self> {
        (b'a'..=b'z').map(Self)
    }

    /// Position in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Uppercase form, as shown on keys and word slots
    #[inline]
    #[must_use]
    pub const fn to_upper(self) -> char {
        self.0.to_ascii_uppercase() as char
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_upper())
    }
}
